pub mod complaint;
pub mod house;
pub mod rent_status;
pub mod tenant;
pub mod wire;

pub use complaint::{Complaint, ComplaintStatus};
pub use house::House;
pub use rent_status::RentStatus;
pub use tenant::Tenant;
