// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod fields;
pub mod forms;
pub mod ids;
pub mod model;
pub mod pricing;
pub mod state;

pub use fields::{FieldError, FieldValue, Fields, Value};
pub use forms::*;
pub use ids::*;
pub use model::*;
pub use pricing::PriceBreakdown;
pub use state::*;
