pub mod probe;

pub use crate::domain::model::{
    ProbeOutcome, ProbeReport, BANNER, DEFAULT_ENDPOINT, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
pub use crate::domain::ports::{ConfigProvider, StatusSource};
pub use crate::utils::error::Result;
