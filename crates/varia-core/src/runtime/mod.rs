pub mod matcher;
pub mod schema;
pub mod value;
pub mod variant;

pub use matcher::{match_value, Matcher};
pub use schema::Schema;
pub use value::Value;
pub use variant::{variant, Tagged, Variant, CATCH_ALL};
