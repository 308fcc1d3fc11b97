use std::fmt;

/// Navigable pages of the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    LandlordLogin,
    TenantLogin,
    LandlordSignup,
    TenantSignup,
    LandlordDashboard { house_id: Option<i64> },
    HouseManagement,
    TenantDashboard,
    MoveIn,
    MoveOut,
    RentPayment { tenant_id: Option<i64>, house_id: Option<i64> },
    Complaints,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::LandlordLogin => "/landlord-login".to_string(),
            Route::TenantLogin => "/tenant-login".to_string(),
            Route::LandlordSignup => "/landlord-signup".to_string(),
            Route::TenantSignup => "/tenant-signup".to_string(),
            Route::LandlordDashboard { house_id } => {
                with_query("/landlord-dashboard", &[("house_id", *house_id)])
            }
            Route::HouseManagement => "/landlord-dashboard/house-management".to_string(),
            Route::TenantDashboard => "/tenant-dashboard".to_string(),
            Route::MoveIn => "/tenant-dashboard/move-in".to_string(),
            Route::MoveOut => "/tenant-dashboard/move-out".to_string(),
            Route::RentPayment { tenant_id, house_id } => with_query(
                "/tenant-dashboard/rent-payment",
                &[("houseId", *house_id), ("tenantId", *tenant_id)],
            ),
            Route::Complaints => "/tenant-dashboard/complaints".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn with_query(path: &str, params: &[(&str, Option<i64>)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params {
        if let Some(value) = value {
            serializer.append_pair(key, &value.to_string());
            any = true;
        }
    }
    if any {
        format!("{path}?{}", serializer.finish())
    } else {
        path.to_string()
    }
}
