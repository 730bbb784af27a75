pub mod banking_finance;
pub mod codes_certifications;
pub mod collection_item;
pub mod credit;
pub mod insurance;
pub mod maintenance;
pub mod record;
pub mod serde_helpers;
pub mod social_media;
pub mod tax;
pub mod upload;
pub mod vehicle_details;
pub mod vehicle_documents;

pub use banking_finance::{BankingFinanceInfo, Loan};
pub use codes_certifications::{Certification, CodesCertificationsInfo};
pub use collection_item::CollectionItem;
pub use credit::{CreditInfo, Tradeline};
pub use insurance::{Coverage, InsuranceInfo};
pub use maintenance::{MaintenanceInfo, ServiceRecord};
pub use record::{TabPayload, TabRecord};
pub use social_media::{SocialAccount, SocialMediaInfo};
pub use tax::TaxInfo;
pub use upload::{UploadEntry, UploadId, UploadStatus};
pub use vehicle_details::VehicleDetails;
pub use vehicle_documents::{DocumentRef, VehicleDocuments};
