//! Askama templates for the HTML index.

use askama::Template;

/// A public route, as listed on the index page.
#[derive(Debug, Clone, Copy)]
pub struct ApiRoute {
    pub path: &'static str,
    pub description: &'static str,
}

/// Every data route the service exposes, in display order.
pub const API_ROUTES: &[ApiRoute] = &[
    ApiRoute {
        path: "/api/v1.0/precipitation",
        description: "precipitation by date and station over the last year of data",
    },
    ApiRoute {
        path: "/api/v1.0/stations",
        description: "identifiers of all stations with measurements",
    },
    ApiRoute {
        path: "/api/v1.0/tobs",
        description: "last year of temperatures at the most active station",
    },
    ApiRoute {
        path: "/api/v1.0/<start>",
        description: "min, max and average temperature from a YYYY-MM-DD date onwards",
    },
    ApiRoute {
        path: "/api/v1.0/<start>/<end>",
        description: "min, max and average temperature between two dates, inclusive",
    },
];

/// Home page listing the available routes.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
    pub routes: &'static [ApiRoute],
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            title: "Hawaii Climate API",
            routes: API_ROUTES,
        }
    }
}
