//! Бизнес-логика поверх БД.

pub mod aircraft_service;
