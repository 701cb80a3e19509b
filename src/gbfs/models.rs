use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};

use super::de;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SystemInformation {
    pub system_id: String,
    pub language: String,
    pub name: String,
    pub short_name: Option<String>,
    pub operator: Option<String>,
    pub url: Option<String>,
    pub purchase_url: Option<String>,
    pub start_date: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub timezone: String,
    pub license_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StationInformationData {
    pub stations: Vec<StationInformation>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StationInformation {
    pub station_id: String,
    pub name: String,
    pub short_name: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub address: Option<String>,
    pub cross_street: Option<String>,
    pub region_id: Option<String>,
    pub post_code: Option<String>,
    pub rental_methods: Option<Vec<String>>,
    pub capacity: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StationStatusData {
    pub stations: Vec<StationStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StationStatus {
    pub station_id: String,
    pub num_bikes_available: u32,
    pub num_bikes_disabled: Option<u32>,
    pub num_docks_available: Option<u32>,
    pub num_docks_disabled: Option<u32>,
    #[serde(deserialize_with = "de::flag")]
    pub is_installed: bool,
    #[serde(deserialize_with = "de::flag")]
    pub is_renting: bool,
    #[serde(deserialize_with = "de::flag")]
    pub is_returning: bool,
    pub last_reported: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FreeBikeStatusData {
    pub bikes: Vec<FreeBike>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FreeBike {
    pub bike_id: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(deserialize_with = "de::flag")]
    pub is_reserved: bool,
    #[serde(deserialize_with = "de::flag")]
    pub is_disabled: bool,
    pub vehicle_type_id: Option<String>,
    pub current_range_meters: Option<f64>,
    pub last_reported: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SystemHoursData {
    pub rental_hours: Vec<RentalHours>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RentalHours {
    pub user_types: Vec<String>,
    pub days: Vec<String>,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SystemCalendarData {
    pub calendars: Vec<CalendarPeriod>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CalendarPeriod {
    pub start_month: u8,
    pub start_day: u8,
    pub start_year: Option<u16>,
    pub end_month: u8,
    pub end_day: u8,
    pub end_year: Option<u16>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SystemRegionsData {
    pub regions: Vec<Region>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Region {
    pub region_id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SystemPricingPlansData {
    pub plans: Vec<PricingPlan>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PricingPlan {
    pub plan_id: String,
    pub url: Option<String>,
    pub name: String,
    pub currency: String,
    pub price: f64,
    #[serde(deserialize_with = "de::flag")]
    pub is_taxable: bool,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SystemAlertsData {
    pub alerts: Vec<Alert>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Alert {
    pub alert_id: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub times: Option<Vec<AlertTime>>,
    pub station_ids: Option<Vec<String>>,
    pub region_ids: Option<Vec<String>>,
    pub url: Option<String>,
    pub summary: String,
    pub description: Option<String>,
    pub last_updated: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AlertTime {
    pub start: i64,
    pub end: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VehicleTypesData {
    pub vehicle_types: Vec<VehicleType>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VehicleType {
    pub vehicle_type_id: String,
    pub form_factor: String,
    pub propulsion_type: String,
    pub max_range_meters: Option<f64>,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GeofencingZonesData {
    pub geofencing_zones: FeatureCollection,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VersionsData {
    pub versions: Vec<Version>,
}

/// One published specification version and the discovery URL serving it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Version {
    pub version: String,
    pub url: String,
}
