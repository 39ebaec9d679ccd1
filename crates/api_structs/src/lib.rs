mod audit;
mod category;
mod notification;
mod record;
mod reminder;
mod status;

pub mod dtos {
    pub use crate::audit::dtos::*;
    pub use crate::category::dtos::*;
    pub use crate::notification::dtos::*;
    pub use crate::record::dtos::*;
    pub use crate::reminder::dtos::*;
}

pub use crate::audit::api::*;
pub use crate::category::api::*;
pub use crate::notification::api::*;
pub use crate::record::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
