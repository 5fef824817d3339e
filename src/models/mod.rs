use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// City a rental offer is located in. Closed set, no dynamic extension.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CityName {
    Paris,
    Cologne,
    Brussels,
    Amsterdam,
    Hamburg,
    Dusseldorf,
}

impl CityName {
    pub const ALL: [CityName; 6] = [
        CityName::Paris,
        CityName::Cologne,
        CityName::Brussels,
        CityName::Amsterdam,
        CityName::Hamburg,
        CityName::Dusseldorf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CityName::Paris => "Paris",
            CityName::Cologne => "Cologne",
            CityName::Brussels => "Brussels",
            CityName::Amsterdam => "Amsterdam",
            CityName::Hamburg => "Hamburg",
            CityName::Dusseldorf => "Dusseldorf",
        }
    }

    /// Fixed coordinates for each city; generated offers never sample these.
    pub fn location(&self) -> Location {
        match self {
            CityName::Paris => Location {
                latitude: 48.85661,
                longitude: 2.351499,
            },
            CityName::Cologne => Location {
                latitude: 50.938361,
                longitude: 6.959974,
            },
            CityName::Brussels => Location {
                latitude: 50.846557,
                longitude: 4.351697,
            },
            CityName::Amsterdam => Location {
                latitude: 52.370216,
                longitude: 4.895168,
            },
            CityName::Hamburg => Location {
                latitude: 53.550341,
                longitude: 10.000654,
            },
            CityName::Dusseldorf => Location {
                latitude: 51.225402,
                longitude: 6.776314,
            },
        }
    }
}

impl FromStr for CityName {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CityName::ALL
            .iter()
            .find(|city| city.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of housing offered for rent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HousingType {
    Apartment,
    House,
    Room,
    Hotel,
}

impl HousingType {
    pub const ALL: [HousingType; 4] = [
        HousingType::Apartment,
        HousingType::House,
        HousingType::Room,
        HousingType::Hotel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HousingType::Apartment => "apartment",
            HousingType::House => "house",
            HousingType::Room => "room",
            HousingType::Hotel => "hotel",
        }
    }
}

impl FromStr for HousingType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HousingType::ALL
            .iter()
            .find(|housing| housing.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl fmt::Display for HousingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account tier of an offer author.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Usual,
    Pro,
}

impl UserType {
    pub const ALL: [UserType; 2] = [UserType::Usual, UserType::Pro];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Usual => "usual",
            UserType::Pro => "pro",
        }
    }
}

impl FromStr for UserType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserType::ALL
            .iter()
            .find(|user_type| user_type.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amenity included with an offer. Wire form keeps the human-readable spacing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Amenity {
    Breakfast,
    #[serde(rename = "Air conditioning")]
    AirConditioning,
    #[serde(rename = "Laptop friendly workspace")]
    LaptopFriendlyWorkspace,
    #[serde(rename = "Baby seat")]
    BabySeat,
    Washer,
    Towels,
    Fridge,
}

impl Amenity {
    pub const ALL: [Amenity; 7] = [
        Amenity::Breakfast,
        Amenity::AirConditioning,
        Amenity::LaptopFriendlyWorkspace,
        Amenity::BabySeat,
        Amenity::Washer,
        Amenity::Towels,
        Amenity::Fridge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Amenity::Breakfast => "Breakfast",
            Amenity::AirConditioning => "Air conditioning",
            Amenity::LaptopFriendlyWorkspace => "Laptop friendly workspace",
            Amenity::BabySeat => "Baby seat",
            Amenity::Washer => "Washer",
            Amenity::Towels => "Towels",
            Amenity::Fridge => "Fridge",
        }
    }
}

impl FromStr for Amenity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amenity::ALL
            .iter()
            .find(|amenity| amenity.as_str() == s)
            .copied()
            .ok_or(())
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic coordinates of a city.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// City together with its coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    pub name: CityName,
    pub location: Location,
}

/// Author of an offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub user_type: UserType,
}

/// A rental listing with 19 canonical fields. Immutable value object: every
/// decode or generation produces an independent instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub title: String,
    pub description: String,
    pub publish_date: String,
    pub city: City,
    pub preview_image: String,
    /// Always exactly 6 links; enforced at decode time, by construction at
    /// generation time.
    pub images: Vec<String>,
    pub is_premium: bool,
    pub is_favorite: bool,
    pub rating: f64,
    pub housing_type: HousingType,
    pub rooms_count: i64,
    pub guests_count: i64,
    pub rental_price: i64,
    /// Non-empty; the wire format does not prevent duplicates.
    pub amenities: Vec<Amenity>,
    pub author: User,
    /// Always 0 here; comment ingestion lives in the REST API, not this tool.
    pub comments_count: i64,
}
