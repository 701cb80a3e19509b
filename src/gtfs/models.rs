use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::de;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Agency {
    pub agency_id: Option<String>,
    pub agency_name: String,
    pub agency_url: String,
    pub agency_timezone: String,
    pub agency_lang: Option<String>,
    pub agency_phone: Option<String>,
    pub agency_fare_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Stop {
    pub stop_id: String,
    pub stop_code: Option<String>,
    pub stop_name: Option<String>,
    pub stop_lat: Option<f64>,
    pub stop_lon: Option<f64>,
    pub zone_id: Option<String>,
    pub location_type: Option<u8>,
    pub parent_station: Option<String>,
    pub platform_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Route {
    pub route_id: String,
    pub agency_id: Option<String>,
    pub route_short_name: Option<String>,
    pub route_long_name: Option<String>,
    pub route_desc: Option<String>,
    pub route_type: i32,
    pub route_color: Option<String>,
    pub route_text_color: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Trip {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    pub trip_headsign: Option<String>,
    pub trip_short_name: Option<String>,
    pub direction_id: Option<u8>,
    pub block_id: Option<String>,
    pub shape_id: Option<String>,
    pub wheelchair_accessible: Option<u8>,
    pub bikes_allowed: Option<u8>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StopTime {
    pub trip_id: String,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub stop_id: String,
    pub stop_sequence: u32,
    pub stop_headsign: Option<String>,
    pub pickup_type: Option<u8>,
    pub drop_off_type: Option<u8>,
    pub shape_dist_traveled: Option<f64>,
    pub timepoint: Option<u8>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Calendar {
    pub service_id: String,
    #[serde(
        deserialize_with = "de::deserialize_bool",
        serialize_with = "de::serialize_bool"
    )]
    pub monday: bool,
    #[serde(
        deserialize_with = "de::deserialize_bool",
        serialize_with = "de::serialize_bool"
    )]
    pub tuesday: bool,
    #[serde(
        deserialize_with = "de::deserialize_bool",
        serialize_with = "de::serialize_bool"
    )]
    pub wednesday: bool,
    #[serde(
        deserialize_with = "de::deserialize_bool",
        serialize_with = "de::serialize_bool"
    )]
    pub thursday: bool,
    #[serde(
        deserialize_with = "de::deserialize_bool",
        serialize_with = "de::serialize_bool"
    )]
    pub friday: bool,
    #[serde(
        deserialize_with = "de::deserialize_bool",
        serialize_with = "de::serialize_bool"
    )]
    pub saturday: bool,
    #[serde(
        deserialize_with = "de::deserialize_bool",
        serialize_with = "de::serialize_bool"
    )]
    pub sunday: bool,
    #[serde(
        deserialize_with = "de::deserialize_date",
        serialize_with = "de::serialize_date"
    )]
    pub start_date: NaiveDate,
    #[serde(
        deserialize_with = "de::deserialize_date",
        serialize_with = "de::serialize_date"
    )]
    pub end_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CalendarDate {
    pub service_id: String,
    #[serde(
        deserialize_with = "de::deserialize_date",
        serialize_with = "de::serialize_date"
    )]
    pub date: NaiveDate,
    pub exception_type: u8,
}
