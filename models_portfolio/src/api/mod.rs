//! API layer types: external-facing requests and responses.

pub mod error;
pub mod requests;
pub mod responses;

pub use error::ValidationError;
pub use requests::{
    CreateMaintenanceRequest, CreatePayment, CreateProperty, CreateTenant, RenewLeaseRequest,
    SearchQueryParams, TerminateLeaseRequest, UpdateMaintenanceRequest, UpdatePayment,
    UpdateProperty, UpdateTenant,
};
pub use responses::{
    ActivityFeedResponse, DashboardReport, LeaseRow, LeasesResponse, MaintenanceRequestsResponse,
    PaymentsResponse, PropertiesResponse, SearchResponse, TenantsResponse,
};
