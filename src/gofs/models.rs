use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SystemInformation {
    pub system_id: String,
    pub language: String,
    pub name: String,
    pub short_name: Option<String>,
    pub operator: Option<String>,
    pub url: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub timezone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceBrandsData {
    pub service_brands: Vec<ServiceBrand>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceBrand {
    pub brand_id: String,
    pub brand_name: String,
    pub brand_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ZonesData {
    pub zones: FeatureCollection,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OperatingRulesData {
    pub operating_rules: Vec<OperatingRule>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OperatingRule {
    pub from_zone_id: String,
    pub to_zone_id: String,
    pub calendar_ids: Option<Vec<String>>,
    pub vehicle_type_ids: Option<Vec<String>>,
    pub start_pickup_window: Option<String>,
    pub end_pickup_window: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CalendarsData {
    pub calendars: Vec<Calendar>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Calendar {
    pub calendar_id: String,
    pub start_date: String,
    pub end_date: String,
    pub days: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BookingRulesData {
    pub booking_rules: Vec<BookingRule>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BookingRule {
    pub booking_type: String,
    pub from_zone_id: Option<String>,
    pub to_zone_id: Option<String>,
    pub prior_notice_duration_min: Option<u32>,
    pub prior_notice_duration_max: Option<u32>,
    pub booking_url: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VehicleTypesData {
    pub vehicle_types: Vec<VehicleType>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VehicleType {
    pub vehicle_type_id: String,
    pub max_capacity: Option<u32>,
    pub wheelchair_boarding: Option<bool>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WaitTimesData {
    pub wait_times: Vec<WaitTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WaitTime {
    pub from_zone_id: String,
    pub to_zone_id: String,
    pub wait_time: u32,
}
