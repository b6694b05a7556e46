pub mod attribute_record;
pub mod bscw_client;
pub mod directory_entry;
pub mod fetched_file;
pub mod object_id;
pub mod path_crumb;

pub use attribute_record::AttributeRecord;
pub use bscw_client::BscwClient;
pub use directory_entry::DirectoryEntry;
pub use fetched_file::FetchedFile;
pub use object_id::ObjectId;
pub use path_crumb::PathCrumb;
