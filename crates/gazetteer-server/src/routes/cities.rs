use actix_web::{
    get, post,
    web::{Data, Query},
    HttpResponse,
};
use gazetteer_core::{DefaultBackend, DefaultGazetteer, PlaceRecord, PlaceSearch};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::routes::{validate_length, ApiError};

type Record = PlaceRecord<DefaultBackend>;

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 20;
const PREFIX_MIN: usize = 1;
const PREFIX_MAX: usize = 20;

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub geonameid: u64,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page_num: usize,
    pub page_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct TwoCitiesQuery {
    pub first_city: String,
    pub second_city: String,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    pub string: String,
}

#[derive(Debug, Serialize)]
pub struct ListCitiesResponse<'a> {
    pub cities_list: &'a [Record],
}

#[derive(Debug, Serialize)]
pub struct TwoCitiesResponse<'a> {
    pub cities_list: [&'a Record; 2],
    pub more_northerly: &'a str,
    pub timezone_coincidence: bool,
    pub time_shifting: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AutocompleteResponse<'a> {
    pub list_of_variations: Vec<&'a str>,
}

#[get("/city")]
pub async fn read_city(
    db: Data<DefaultGazetteer>,
    query: Query<CityQuery>,
) -> Result<HttpResponse, ApiError> {
    if query.geonameid == 0 {
        return Err(ApiError::Validation(
            "geonameid must be greater than 0".to_string(),
        ));
    }
    let city = db.city(query.geonameid)?;
    Ok(HttpResponse::Ok().json(city))
}

#[get("/list-of-cities")]
pub async fn read_cities_page(
    db: Data<DefaultGazetteer>,
    query: Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let cities_list = db.cities_page(query.page_num, query.page_size)?;
    Ok(HttpResponse::Ok().json(ListCitiesResponse { cities_list }))
}

#[get("/two-cities")]
pub async fn compare_cities(
    db: Data<DefaultGazetteer>,
    query: Query<TwoCitiesQuery>,
) -> Result<HttpResponse, ApiError> {
    validate_length("first_city", &query.first_city, NAME_MIN, NAME_MAX)?;
    validate_length("second_city", &query.second_city, NAME_MIN, NAME_MAX)?;

    let result = db.compare_cities(&query.first_city, &query.second_city)?;
    info!(
        first = result.first().id(),
        second = result.second().id(),
        offset_delta_seconds = result.offset_delta_seconds,
        "compared cities"
    );

    Ok(HttpResponse::Ok().json(TwoCitiesResponse {
        cities_list: result.cities,
        more_northerly: &result.more_northerly,
        timezone_coincidence: result.timezone_coincidence,
        time_shifting: &result.time_shifting,
    }))
}

#[post("/autocomplete")]
pub async fn autocomplete(
    db: Data<DefaultGazetteer>,
    query: Query<AutocompleteQuery>,
) -> Result<HttpResponse, ApiError> {
    validate_length("string", &query.string, PREFIX_MIN, PREFIX_MAX)?;
    let list_of_variations = db.autocomplete(&query.string);
    Ok(HttpResponse::Ok().json(AutocompleteResponse { list_of_variations }))
}
