//! sea-orm entities: самолёты и справочники.

pub mod aircrafts;
pub mod airplane_types;
pub mod engine_types;
pub mod media;
