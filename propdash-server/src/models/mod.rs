//! Domain models with validation at construction
//!
//! Request input becomes a `New*` type only after passing field checks.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod property;
pub mod tenant;
pub mod lease;
pub mod payment;
pub mod maintenance;
pub mod stats;

pub use validation::ValidationError;
pub use property::{NewProperty, Property, PropertyStatus};
pub use tenant::{Email, NewTenant, Tenant, TenantWithProperty};
pub use lease::{Lease, LeaseWithParties, NewLease, LEASE_ACTIVE};
pub use payment::{NewPayment, Payment, PaymentWithParties, PAYMENT_PAID};
pub use maintenance::{
    MaintenanceRequest, MaintenanceWithProperty, NewMaintenance, Priority, MAINTENANCE_OPEN,
};
pub use stats::{occupancy_rate, DashboardStats};
