use cloudbit::{CloudError, CloudResult, FilterError, OutputError, Table};
use std::error::Error;

/// Error handling and propagation tests
#[cfg(test)]
mod error_handling_tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let errors = vec![
            CloudError::Config { message: "Config error".to_string() },
            CloudError::Snapshot { message: "Snapshot error".to_string() },
            CloudError::NotFound { kind: "server", id: 4 },
            CloudError::InvalidInput("Invalid input".to_string()),
            CloudError::Filter(FilterError::NotFound { term: "web".to_string() }),
            CloudError::Output(OutputError::UnsupportedType { type_name: "string" }),
        ];

        for error in errors {
            let display = error.to_string();
            assert!(!display.is_empty(), "Error display should not be empty");
        }

        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<CloudError>();
        assert_send_sync::<FilterError>();
        assert_send_sync::<OutputError>();
    }

    #[test]
    fn test_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let cloud_error: CloudError = io_error.into();
        assert!(matches!(cloud_error, CloudError::Io(_)));

        let filter_error = FilterError::Ambiguous {
            term: "alpha".to_string(),
            candidates: vec!["alpha (1)".to_string(), "alpha-2 (2)".to_string()],
        };
        let cloud_error: CloudError = filter_error.clone().into();
        // Transparent variants keep the inner message
        assert_eq!(cloud_error.to_string(), filter_error.to_string());
    }

    #[test]
    fn test_result_type() {
        fn success_function() -> CloudResult<String> {
            Ok("success".to_string())
        }

        fn error_function() -> CloudResult<String> {
            Err(CloudError::Config { message: "Test error".to_string() })
        }

        assert_eq!(success_function().unwrap(), "success");
        assert!(error_function().unwrap_err().to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_chain() {
        let root_cause = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let output_error: OutputError = root_cause.into();
        let cloud_error: CloudError = output_error.into();

        let mut current_error: &dyn Error = &cloud_error;
        let mut depth = 0;
        while let Some(source) = current_error.source() {
            current_error = source;
            depth += 1;
            if depth > 10 {
                break;
            }
        }

        assert!(depth > 0, "Should have at least one source error");
        assert!(current_error.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_unsupported_type_from_table() {
        let mut table = Table::new();
        let err = table.insert_json(serde_json::json!(true)).unwrap_err();
        let cloud_error: CloudError = err.into();
        assert!(cloud_error.to_string().contains("\"bool\""));
    }

    #[test]
    fn test_anyhow_context_chain() {
        fn find_cluster() -> anyhow::Result<()> {
            use anyhow::Context;
            Err(CloudError::Filter(FilterError::NotFound { term: "prod".to_string() }))
                .context("find kubernetes cluster")
        }

        let err = find_cluster().unwrap_err();
        assert_eq!(format!("{:#}", err), "find kubernetes cluster: no match found for \"prod\"");
        assert!(err.downcast_ref::<CloudError>().is_some());
    }

    #[tokio::test]
    async fn test_async_error_propagation() {
        async fn failing_async_function() -> CloudResult<()> {
            Err(CloudError::NotFound { kind: "network", id: 12 })
        }

        async fn calling_function() -> CloudResult<()> {
            failing_async_function().await?;
            Ok(())
        }

        let error = calling_function().await.unwrap_err();
        assert_eq!(error.to_string(), "network with id 12 does not exist");
    }

    #[test]
    fn test_error_size() {
        let error_size = std::mem::size_of::<CloudError>();
        assert!(error_size <= 128, "CloudError too large: {} bytes", error_size);
    }
}
