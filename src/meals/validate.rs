use lazy_static::lazy_static;
use regex::Regex;
use time::{macros::format_description, Date, PrimitiveDateTime, Time};

use crate::error::AppError;
use crate::meals::dto::MealBody;
use crate::meals::repo_types::MealInput;

pub(crate) const INVALID_BODY: &str =
    "Invalid data sent. Expected name:string, description:string, date:string, time:string, on_diet:boolean";
pub(crate) const INVALID_DATE_FORMAT: &str = "Invalid date format. Expected YYYY-MM-DD";
pub(crate) const INVALID_TIME_FORMAT: &str = "Invalid time format. Expected HH:mm";
pub(crate) const INVALID_DATE: &str = "Invalid date";
pub(crate) const INVALID_MEAL_ID: &str = "Invalid Meal ID. Expected a UUID";

pub(crate) fn is_valid_date_format(date: &str) -> bool {
    lazy_static! {
        static ref DATE_RE: Regex =
            Regex::new(r"^[12][0-9]{3}-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])$").unwrap();
    }
    DATE_RE.is_match(date)
}

pub(crate) fn is_valid_time_format(time: &str) -> bool {
    lazy_static! {
        static ref TIME_RE: Regex = Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").unwrap();
    }
    TIME_RE.is_match(time)
}

/// Combines a shape-checked date and time into a calendar-valid timestamp.
pub fn parse_timestamp(date: &str, time: &str) -> Result<PrimitiveDateTime, AppError> {
    if !is_valid_date_format(date) {
        return Err(AppError::validation(INVALID_DATE_FORMAT));
    }
    if !is_valid_time_format(time) {
        return Err(AppError::validation(INVALID_TIME_FORMAT));
    }
    let date = Date::parse(date, format_description!("[year]-[month]-[day]"))
        .map_err(|_| AppError::validation(INVALID_DATE))?;
    let time = Time::parse(time, format_description!("[hour]:[minute]"))
        .map_err(|_| AppError::validation(INVALID_DATE))?;
    Ok(PrimitiveDateTime::new(date, time))
}

impl TryFrom<MealBody> for MealInput {
    type Error = AppError;

    fn try_from(body: MealBody) -> Result<Self, Self::Error> {
        let timestamp = parse_timestamp(&body.date, &body.time)?;
        Ok(MealInput {
            name: body.name,
            description: body.description,
            timestamp,
            on_diet: body.on_diet,
        })
    }
}
