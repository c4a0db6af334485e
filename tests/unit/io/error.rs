//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use lifetile::PatternError;
    use lifetile::io::error::{WithPath, invalid_header, invalid_parameter};
    use std::error::Error;
    use std::path::Path;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = PatternError::FileSystem {
            path: "/tmp/test.rle".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(PatternError::MissingHeader.source().is_none());
    }

    // Tests header errors describe the problem
    #[test]
    fn test_header_error_messages() {
        assert!(PatternError::MissingHeader.to_string().contains("x = "));

        let message = invalid_header(&"missing 'rule' field").to_string();
        assert!(message.contains("missing 'rule' field"));
    }

    // Tests UnrecognizedSymbol includes the character and offset
    // Verified by omitting offset from message
    #[test]
    fn test_unrecognized_symbol_error() {
        let error = PatternError::UnrecognizedSymbol {
            symbol: 'x',
            offset: 7,
        };

        let message = error.to_string();
        assert!(message.contains("'x'"));
        assert!(message.contains('7'));
    }

    // Tests InvalidParameter error contains all fields
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("repeat", &"0x2", &"must be at least 1").to_string();

        assert!(message.contains("repeat"));
        assert!(message.contains("0x2"));
        assert!(message.contains("must be at least 1"));
    }

    // Tests with_path attaches the path and operation to I/O failures
    // Verified by dropping the path in the mapping
    #[test]
    fn test_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = result
            .with_path(Path::new("/restricted/out.rle"), "write pattern")
            .unwrap_err();

        let message = error.to_string();
        assert!(message.contains("/restricted/out.rle"));
        assert!(message.contains("write pattern"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests conversions from foreign errors
    #[test]
    fn test_from_conversions() {
        let io: PatternError = std::io::Error::other("boom").into();
        assert!(matches!(io, PatternError::FileSystem { .. }));

        let img: PatternError = image::ImageError::IoError(std::io::Error::other("bad")).into();
        assert!(matches!(img, PatternError::ImageLoad { .. }));
    }
}
