use anyhow::{bail, Context, Result};

use crate::cdn_service::CdnService;
use crate::config::Service;
use crate::mock_service::MockService;
use crate::service::BlogService;

/// Maps the configured source to a backend instance.
pub fn create_service(service: &Service) -> Result<Box<dyn BlogService>> {
    match service.source.as_str() {
        "cdn" => {
            let url = service.url
                .as_deref()
                .context("The cdn service requires a url")?;
            Ok(Box::new(CdnService::new(url)))
        }
        "mock" => Ok(Box::new(MockService::new())),
        other => bail!("Unknown blog service type: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(source: &str, url: Option<&str>) -> Service {
        Service {
            source: source.to_string(),
            url: url.map(|u| u.to_string()),
        }
    }

    #[test]
    fn test_creates_known_backends() {
        assert!(create_service(&service("cdn", Some("https://cdn.example.com"))).is_ok());
        assert!(create_service(&service("mock", None)).is_ok());
    }

    #[test]
    fn test_cdn_requires_url() {
        let err = create_service(&service("cdn", None)).unwrap_err();
        assert_eq!(err.to_string(), "The cdn service requires a url");
    }

    #[test]
    fn test_unknown_source_names_the_discriminator() {
        let err = create_service(&service("s3", None)).unwrap_err();
        assert_eq!(err.to_string(), "Unknown blog service type: s3");
    }
}
