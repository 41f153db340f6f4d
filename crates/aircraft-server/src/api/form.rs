//! Типизированные формы (application/x-www-form-urlencoded).

use crate::error::AppError;
use crate::services::aircraft_service::{AircraftReplacement, NewAircraft};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Форма POST: все поля обязательны.
#[derive(Debug, Deserialize)]
pub struct CreateAircraftForm {
    pub model: String,
    pub engine_amount: i32,
    pub passenger_capacity: i32,
    pub range_in_km: i32,
}

/// Форма PUT: отсутствующее или пустое поле превращается в NULL.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateAircraftForm {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub engine_amount: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub passenger_capacity: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub range_in_km: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub media_id: Option<i32>,
}

/// Тело DELETE: id как запасной источник, если его нет в URL.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteAircraftForm {
    pub id: Option<String>,
}

/// Разобрать тело запроса как форму; ошибки разбора дают 400.
pub fn parse_form<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_urlencoded::from_bytes(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid form body: {e}")))
}

impl CreateAircraftForm {
    pub fn into_new_aircraft(self) -> Result<NewAircraft, AppError> {
        // Пробелы только для проверки; сохраняется исходное значение
        if self.model.trim().is_empty() {
            return Err(AppError::BadRequest("Field 'model' must not be empty".into()));
        }
        Ok(NewAircraft {
            model: self.model,
            engine_amount: self.engine_amount,
            passenger_capacity: self.passenger_capacity,
            range_in_km: self.range_in_km,
        })
    }
}

impl From<UpdateAircraftForm> for AircraftReplacement {
    fn from(form: UpdateAircraftForm) -> Self {
        AircraftReplacement {
            model: form.model,
            engine_amount: form.engine_amount,
            passenger_capacity: form.passenger_capacity,
            range_in_km: form.range_in_km,
            media_id: form.media_id,
        }
    }
}

/// Строка как есть; пустая или из одних пробелов даёт `None`.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}

/// Число из поля формы; пробелы по краям отбрасываются, пустое поле даёт `None`.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
