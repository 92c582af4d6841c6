use crate::domain::model::ApiRequest;
use crate::utils::error::{GatewayError, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Places,
    Weather,
    Translate,
    Languages,
    Recommend,
    Photo,
    Wiki,
}

pub struct RouteSpec {
    pub path: &'static str,
    pub route: Route,
    pub required: &'static [&'static str],
    pub optional: &'static [(&'static str, &'static str)],
}

/// The whole HTTP surface. Paths are matched exactly after stripping one
/// leading slash.
pub const ROUTES: &[RouteSpec] = &[
    RouteSpec {
        path: "api/places",
        route: Route::Places,
        required: &["destination"],
        optional: &[],
    },
    RouteSpec {
        path: "api/weather",
        route: Route::Weather,
        required: &["city"],
        optional: &[],
    },
    RouteSpec {
        path: "api/translate",
        route: Route::Translate,
        required: &["text"],
        optional: &[("lang", "EN")],
    },
    RouteSpec {
        path: "api/languages",
        route: Route::Languages,
        required: &[],
        optional: &[],
    },
    RouteSpec {
        path: "api/ia",
        route: Route::Recommend,
        required: &["lugar"],
        optional: &[],
    },
    RouteSpec {
        path: "api/foto",
        route: Route::Photo,
        required: &["photo_ref"],
        optional: &[],
    },
    RouteSpec {
        path: "api/wiki",
        route: Route::Wiki,
        required: &["lugar"],
        optional: &[],
    },
];

#[derive(Debug)]
pub struct ResolvedRoute {
    pub route: Route,
    pub params: HashMap<String, String>,
}

/// Matches the request against the route table and collects its parameters.
/// Empty values count as missing, and optional parameters fall back to their
/// declared default.
pub fn resolve(request: &ApiRequest) -> Result<ResolvedRoute> {
    let path = request.path.strip_prefix('/').unwrap_or(&request.path);
    let spec = ROUTES
        .iter()
        .find(|spec| spec.path == path)
        .ok_or(GatewayError::RouteNotFound)?;

    let mut params = HashMap::new();
    for name in spec.required {
        let value = request
            .params
            .get(*name)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| GatewayError::MissingParameter {
                name: (*name).to_string(),
            })?;
        params.insert((*name).to_string(), value.clone());
    }
    for (name, default) in spec.optional {
        let value = request
            .params
            .get(*name)
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| (*default).to_string());
        params.insert((*name).to_string(), value);
    }

    Ok(ResolvedRoute {
        route: spec.route,
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_table_paths_are_unique() {
        let paths: HashSet<_> = ROUTES.iter().map(|spec| spec.path).collect();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn matches_with_and_without_leading_slash() {
        let request = ApiRequest::get("/api/languages");
        assert_eq!(resolve(&request).unwrap().route, Route::Languages);

        let request = ApiRequest::get("api/languages");
        assert_eq!(resolve(&request).unwrap().route, Route::Languages);
    }

    #[test]
    fn unknown_path_is_not_found() {
        let request = ApiRequest::get("/api/unknown");
        assert!(matches!(
            resolve(&request).unwrap_err(),
            GatewayError::RouteNotFound
        ));
    }

    #[test]
    fn missing_required_parameter_names_it() {
        let request = ApiRequest::get("/api/weather");
        let err = resolve(&request).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: city");
    }

    #[test]
    fn empty_required_parameter_counts_as_missing() {
        let request = ApiRequest::get("/api/places").with_param("destination", "");
        assert!(matches!(
            resolve(&request).unwrap_err(),
            GatewayError::MissingParameter { .. }
        ));
    }

    #[test]
    fn translate_lang_defaults_to_en() {
        let request = ApiRequest::get("/api/translate").with_param("text", "Hola");
        let resolved = resolve(&request).unwrap();
        assert_eq!(resolved.params["lang"], "EN");

        let request = ApiRequest::get("/api/translate")
            .with_param("text", "Hola")
            .with_param("lang", "de");
        let resolved = resolve(&request).unwrap();
        assert_eq!(resolved.params["lang"], "de");
    }
}
