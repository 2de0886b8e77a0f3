use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
        paths(
            super::health::health_handler,
            super::auth::signup::handler,
            super::auth::signin::handler,
            super::auth::reset_password::handler,
            super::auth::me::handler,
            super::properties::list::handler,
            super::properties::create::handler,
            super::properties::get::handler,
            super::properties::update::handler,
            super::properties::delete::handler,
            super::tenants::list::handler,
            super::tenants::create::handler,
            super::tenants::get::handler,
            super::tenants::update::handler,
            super::payments::list::handler,
            super::payments::create::handler,
            super::payments::update::handler,
            super::maintenance::list::handler,
            super::maintenance::create::handler,
            super::maintenance::update::handler,
            super::leases::list::handler,
            super::leases::renew::handler,
            super::leases::terminate::handler,
            super::users::list::handler,
            super::users::update::handler,
            super::reports::dashboard::handler,
            super::reports::activity::handler,
            super::search::handler,
            super::media::handler,
        ),
        components(
            schemas(
                models_portfolio::Property,
                models_portfolio::PropertyType,
                models_portfolio::PropertyStatus,
                models_portfolio::UnitRecord,
                models_portfolio::Tenant,
                models_portfolio::TenantStatus,
                models_portfolio::shared::EmergencyContact,
                models_portfolio::Payment,
                models_portfolio::PaymentType,
                models_portfolio::PaymentStatus,
                models_portfolio::PaymentMethod,
                models_portfolio::MaintenanceRequest,
                models_portfolio::MaintenancePriority,
                models_portfolio::MaintenanceStatus,
                models_portfolio::MaintenanceCategory,
                models_portfolio::DashboardStats,
                models_portfolio::DashboardRates,
                models_portfolio::ActivityEvent,
                models_portfolio::ActivityKind,
                models_portfolio::ActivitySeverity,
                models_portfolio::api::CreateProperty,
                models_portfolio::api::UpdateProperty,
                models_portfolio::api::CreateTenant,
                models_portfolio::api::UpdateTenant,
                models_portfolio::api::CreatePayment,
                models_portfolio::api::UpdatePayment,
                models_portfolio::api::CreateMaintenanceRequest,
                models_portfolio::api::UpdateMaintenanceRequest,
                models_portfolio::api::RenewLeaseRequest,
                models_portfolio::api::TerminateLeaseRequest,
                models_portfolio::api::PropertiesResponse,
                models_portfolio::api::TenantsResponse,
                models_portfolio::api::PaymentsResponse,
                models_portfolio::api::MaintenanceRequestsResponse,
                models_portfolio::api::LeaseRow,
                models_portfolio::api::LeasesResponse,
                models_portfolio::api::DashboardReport,
                models_portfolio::api::ActivityFeedResponse,
                models_portfolio::api::SearchResponse,
                model_user::User,
                model_user::Role,
                model_user::UsersResponse,
                model_user::UpdateUserRequest,
                model_user::SignUpRequest,
                model_user::SignInRequest,
                model_user::ResetPasswordRequest,
                model_user::AuthResponse,
                model_user::response::ErrorResponse,
                model_user::response::EmptyResponse,
                super::media::MediaUploadResponse,
            ),
        ),
        tags(
            (name = "haven portfolio service", description = "Property Portfolio Service")
        )
    )]
pub struct ApiDoc;
