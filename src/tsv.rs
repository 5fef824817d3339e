//! Bidirectional mapping between offers and 19-field tab-separated lines.
//!
//! The format has no escaping mechanism: tabs, semicolons and newlines inside
//! field values would corrupt a line, so source strings must be free of them.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{Error, Result};
use crate::mock_server::MockServerData;
use crate::models::{Amenity, City, CityName, HousingType, Location, Offer, User, UserType};
use crate::random::{random_bool, random_date, random_float, random_int, random_item, random_subset};

/// Fields per encoded line, in the fixed order documented on [`encode_offer`].
pub const TSV_COLUMNS_COUNT: usize = 19;
/// Every offer carries exactly this many image links.
pub const IMAGES_COUNT: usize = 6;
/// Ratings are generated with one decimal digit.
pub const RATING_PRECISION: u32 = 1;

fn parse_boolean(value: &str, field: &'static str, line: usize) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::InvalidBoolean { line, field }),
    }
}

fn parse_enum_value<T: FromStr>(value: &str, field: &'static str, line: usize) -> Result<T> {
    value.parse().map_err(|_| Error::InvalidEnumValue {
        line,
        field,
        value: value.to_string(),
    })
}

fn parse_number<T: FromStr>(value: &str, field: &'static str, line: usize) -> Result<T> {
    value.parse().map_err(|_| Error::InvalidNumber { line, field })
}

// `f64::from_str` accepts "NaN" and "inf", neither of which belongs in seed
// data; float fields only admit finite values.
fn parse_float(value: &str, field: &'static str, line: usize) -> Result<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
        .ok_or(Error::InvalidNumber { line, field })
}

/// Re-serializes a publish date to millisecond-precision ISO-8601.
///
/// Anything that is not valid RFC 3339 is a hard decode error; the format has
/// a single canonical date representation.
fn normalize_publish_date(value: &str, line: usize) -> Result<String> {
    DateTime::parse_from_rfc3339(value)
        .map(|date| date.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true))
        .map_err(|_| Error::InvalidDate {
            line,
            value: value.to_string(),
        })
}

/// Decodes one TSV line into an [`Offer`].
///
/// `line_number` is the 1-based physical position in the source file and is
/// carried into every error so import failures point at the exact line.
pub fn parse_offer_line(line: &str, line_number: usize) -> Result<Offer> {
    let columns: Vec<&str> = line.split('\t').collect();

    if columns.len() != TSV_COLUMNS_COUNT {
        return Err(Error::FieldCount {
            line: line_number,
            expected: TSV_COLUMNS_COUNT,
            found: columns.len(),
        });
    }

    let images: Vec<String> = columns[5].split(';').map(str::to_string).collect();
    if images.len() != IMAGES_COUNT {
        return Err(Error::ImagesCount {
            line: line_number,
            found: images.len(),
        });
    }

    let amenities_raw: Vec<&str> = columns[13].split(';').collect();
    if amenities_raw.is_empty() {
        return Err(Error::EmptyAmenities { line: line_number });
    }
    let amenities = amenities_raw
        .iter()
        .map(|raw| parse_enum_value::<Amenity>(raw, "amenities", line_number))
        .collect::<Result<Vec<_>>>()?;

    let city_name: CityName = parse_enum_value(columns[3], "city", line_number)?;
    let housing_type: HousingType = parse_enum_value(columns[9], "housingType", line_number)?;
    let user_type: UserType = parse_enum_value(columns[16], "userType", line_number)?;

    Ok(Offer {
        title: columns[0].to_string(),
        description: columns[1].to_string(),
        publish_date: normalize_publish_date(columns[2], line_number)?,
        city: City {
            name: city_name,
            location: Location {
                latitude: parse_float(columns[17], "latitude", line_number)?,
                longitude: parse_float(columns[18], "longitude", line_number)?,
            },
        },
        preview_image: columns[4].to_string(),
        images,
        is_premium: parse_boolean(columns[6], "isPremium", line_number)?,
        is_favorite: parse_boolean(columns[7], "isFavorite", line_number)?,
        rating: parse_float(columns[8], "rating", line_number)?,
        housing_type,
        rooms_count: parse_number(columns[10], "roomsCount", line_number)?,
        guests_count: parse_number(columns[11], "guestsCount", line_number)?,
        rental_price: parse_number(columns[12], "rentalPrice", line_number)?,
        amenities,
        author: User {
            name: columns[14].to_string(),
            email: columns[15].to_string(),
            user_type,
        },
        comments_count: 0,
    })
}

/// Builds a random offer from the fetched string pools.
///
/// The city location comes from the fixed per-city table, never from sampling.
pub fn generate_offer(mock_data: &MockServerData) -> Offer {
    let city_name = *random_item(&CityName::ALL);

    Offer {
        title: random_item(&mock_data.titles).clone(),
        description: random_item(&mock_data.descriptions).clone(),
        publish_date: random_date(),
        city: City {
            name: city_name,
            location: city_name.location(),
        },
        preview_image: random_item(&mock_data.preview_images).clone(),
        images: random_subset(&mock_data.images, IMAGES_COUNT, IMAGES_COUNT),
        is_premium: random_bool(),
        is_favorite: random_bool(),
        rating: random_float(1.0, 5.0, RATING_PRECISION),
        housing_type: *random_item(&HousingType::ALL),
        rooms_count: random_int(1, 8),
        guests_count: random_int(1, 10),
        rental_price: random_int(100, 100_000),
        amenities: random_subset(&Amenity::ALL, 1, Amenity::ALL.len()),
        author: User {
            name: random_item(&mock_data.user_names).clone(),
            email: random_item(&mock_data.user_emails).clone(),
            user_type: *random_item(&UserType::ALL),
        },
        comments_count: 0,
    }
}

/// Serializes an offer into one tab-separated line (no trailing newline).
///
/// Field order: title, description, publishDate, city, previewImage,
/// images (`;`-joined), isPremium, isFavorite, rating, housingType,
/// roomsCount, guestsCount, rentalPrice, amenities (`;`-joined), author name,
/// author email, userType, latitude, longitude.
pub fn encode_offer(offer: &Offer) -> String {
    let amenities: Vec<&str> = offer.amenities.iter().map(Amenity::as_str).collect();

    [
        offer.title.as_str(),
        offer.description.as_str(),
        offer.publish_date.as_str(),
        offer.city.name.as_str(),
        offer.preview_image.as_str(),
        &offer.images.join(";"),
        &offer.is_premium.to_string(),
        &offer.is_favorite.to_string(),
        &offer.rating.to_string(),
        offer.housing_type.as_str(),
        &offer.rooms_count.to_string(),
        &offer.guests_count.to_string(),
        &offer.rental_price.to_string(),
        &amenities.join(";"),
        offer.author.name.as_str(),
        offer.author.email.as_str(),
        offer.author.user_type.as_str(),
        &offer.city.location.latitude.to_string(),
        &offer.city.location.longitude.to_string(),
    ]
    .join("\t")
}

/// One generated line, ready for the file writer.
pub fn create_offer_tsv_row(mock_data: &MockServerData) -> String {
    encode_offer(&generate_offer(mock_data))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_LINE: &str = "Cozy flat\tNice place\t2023-01-01T00:00:00.000Z\tParis\timg.jpg\ta;b;c;d;e;f\ttrue\tfalse\t4.5\tapartment\t2\t4\t1500\tBreakfast;Washer\tJohn\tjohn@x.com\tusual\t48.85661\t2.351499";

    fn sample_mock_data() -> MockServerData {
        MockServerData {
            titles: vec!["Cozy flat".into(), "Bright loft".into()],
            descriptions: vec!["Nice place".into(), "Close to the center".into()],
            preview_images: vec!["preview.jpg".into()],
            images: vec![
                "1.jpg".into(),
                "2.jpg".into(),
                "3.jpg".into(),
                "4.jpg".into(),
                "5.jpg".into(),
                "6.jpg".into(),
                "7.jpg".into(),
            ],
            user_names: vec!["John".into(), "Maria".into()],
            user_emails: vec!["john@x.com".into(), "maria@x.com".into()],
        }
    }

    #[test]
    fn parses_a_well_formed_line() {
        let offer = parse_offer_line(SAMPLE_LINE, 1).unwrap();

        assert_eq!(offer.title, "Cozy flat");
        assert_eq!(offer.city.name, CityName::Paris);
        assert_eq!(offer.city.location.latitude, 48.85661);
        assert_eq!(offer.rating, 4.5);
        assert_eq!(offer.housing_type, HousingType::Apartment);
        assert_eq!(offer.amenities, vec![Amenity::Breakfast, Amenity::Washer]);
        assert_eq!(offer.author.user_type, UserType::Usual);
        assert_eq!(offer.publish_date, "2023-01-01T00:00:00.000Z");
        assert_eq!(offer.comments_count, 0);
    }

    #[test]
    fn rejects_wrong_field_count_citing_the_actual_count() {
        let err = parse_offer_line("just\tthree\tfields", 7).unwrap_err();
        match err {
            Error::FieldCount { line, expected, found } => {
                assert_eq!(line, 7);
                assert_eq!(expected, TSV_COLUMNS_COUNT);
                assert_eq!(found, 3);
            }
            other => panic!("expected FieldCount, got {other:?}"),
        }
    }

    #[test]
    fn rejects_images_that_do_not_split_into_six() {
        let line = SAMPLE_LINE.replace("a;b;c;d;e;f", "a;b;c");
        let err = parse_offer_line(&line, 1).unwrap_err();
        match err {
            Error::ImagesCount { found, .. } => assert_eq!(found, 3),
            other => panic!("expected ImagesCount, got {other:?}"),
        }
    }

    #[test]
    fn accepts_six_images_even_when_some_are_empty() {
        let line = SAMPLE_LINE.replace("a;b;c;d;e;f", "a;;c;;e;f");
        let offer = parse_offer_line(&line, 1).unwrap();
        assert_eq!(offer.images.len(), 6);
        assert_eq!(offer.images[1], "");
    }

    #[test]
    fn rejects_unknown_amenity_naming_the_field() {
        let line = SAMPLE_LINE.replace("Breakfast;Washer", "Breakfast;Pool");
        let err = parse_offer_line(&line, 1).unwrap_err();
        match err {
            Error::InvalidEnumValue { field, value, .. } => {
                assert_eq!(field, "amenities");
                assert_eq!(value, "Pool");
            }
            other => panic!("expected InvalidEnumValue, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_city_naming_the_raw_value() {
        let line = SAMPLE_LINE.replace("Paris", "Oslo");
        let err = parse_offer_line(&line, 1).unwrap_err();
        match err {
            Error::InvalidEnumValue { field, value, .. } => {
                assert_eq!(field, "city");
                assert_eq!(value, "Oslo");
            }
            other => panic!("expected InvalidEnumValue, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_boolean_premium_flag() {
        let line = SAMPLE_LINE.replace("\ttrue\t", "\tyes\t");
        let err = parse_offer_line(&line, 1).unwrap_err();
        match err {
            Error::InvalidBoolean { field, .. } => assert_eq!(field, "isPremium"),
            other => panic!("expected InvalidBoolean, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_numeric_price() {
        let line = SAMPLE_LINE.replace("\t1500\t", "\tcheap\t");
        let err = parse_offer_line(&line, 1).unwrap_err();
        match err {
            Error::InvalidNumber { field, .. } => assert_eq!(field, "rentalPrice"),
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn rejects_non_finite_float_fields() {
        let line = SAMPLE_LINE.replace("\t4.5\t", "\tNaN\t");
        let err = parse_offer_line(&line, 1).unwrap_err();
        match err {
            Error::InvalidNumber { field, .. } => assert_eq!(field, "rating"),
            other => panic!("expected InvalidNumber, got {other:?}"),
        }

        let line = SAMPLE_LINE.replace("\t48.85661\t", "\tinf\t");
        let err = parse_offer_line(&line, 1).unwrap_err();
        match err {
            Error::InvalidNumber { field, .. } => assert_eq!(field, "latitude"),
            other => panic!("expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unparseable_publish_date() {
        let line = SAMPLE_LINE.replace("2023-01-01T00:00:00.000Z", "yesterday");
        let err = parse_offer_line(&line, 4).unwrap_err();
        match err {
            Error::InvalidDate { line, value } => {
                assert_eq!(line, 4);
                assert_eq!(value, "yesterday");
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn normalizes_publish_date_to_utc_milliseconds() {
        let line = SAMPLE_LINE.replace("2023-01-01T00:00:00.000Z", "2023-06-01T12:30:00+02:00");
        let offer = parse_offer_line(&line, 1).unwrap();
        assert_eq!(offer.publish_date, "2023-06-01T10:30:00.000Z");
    }

    #[test]
    fn encode_then_parse_round_trips() {
        let offer = parse_offer_line(SAMPLE_LINE, 1).unwrap();
        let encoded = encode_offer(&offer);
        assert_eq!(encoded, SAMPLE_LINE);

        let reparsed = parse_offer_line(&encoded, 1).unwrap();
        assert_eq!(reparsed, offer);
    }

    #[test]
    fn generated_rows_decode_cleanly() {
        let mock_data = sample_mock_data();
        for line_number in 1..=50 {
            let row = create_offer_tsv_row(&mock_data);
            let offer = parse_offer_line(&row, line_number).unwrap();

            assert_eq!(offer.images.len(), IMAGES_COUNT);
            assert!(!offer.amenities.is_empty());
            assert!((1.0..=5.0).contains(&offer.rating));
            assert!((1..=8).contains(&offer.rooms_count));
            assert!((1..=10).contains(&offer.guests_count));
            assert!((100..=100_000).contains(&offer.rental_price));
            assert_eq!(offer.city.location, offer.city.name.location());
            assert_eq!(offer.comments_count, 0);
        }
    }
}
