pub mod json_file_repository;
pub mod traits;

pub use json_file_repository::JsonFileRepository;
pub use traits::AddressBookRepository;
