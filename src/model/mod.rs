pub mod page;
pub mod phone;
pub mod im;
pub mod address;
pub mod contact;

// Re-exports for convenience
pub use page::PageRef;
pub use phone::{PhoneNumber, PhoneType};
pub use im::{Im, ImType};
pub use address::{Address, AddressType};
pub use contact::{Body, Contact, Email};
