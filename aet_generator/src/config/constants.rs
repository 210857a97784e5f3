pub mod compile_time {
    pub mod registry {
        /// Maximum number of error definitions the registry may hold
        /// SECURITY: Bounds memory use and emitted artifact size
        pub const MAX_DEFINITIONS: usize = 512;

        /// Maximum variant identifier length (255 characters)
        /// SECURITY: Prevents degenerate identifiers in the emitted artifact
        pub const MAX_IDENTIFIER_LENGTH: usize = 255;

        /// Maximum title length
        /// RESOURCE: Titles are short headlines, not prose
        pub const MAX_TITLE_LENGTH: usize = 256;

        /// Maximum message length
        /// RESOURCE: Bounds per-definition artifact contribution
        pub const MAX_MESSAGE_LENGTH: usize = 1024;
    }

    pub mod logging {
        /// Log event buffer size for the in-memory logger
        /// RESOURCE: Controls memory usage for event capture
        pub const LOG_BUFFER_SIZE: usize = 1000;

        /// Maximum log message length
        /// RESOURCE: Limits resource consumption per event
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4096;

        /// Minimum level at which security-relevant events are always logged
        /// SECURITY: 0 = Error, 1 = Warning, 2 = Info
        pub const SECURITY_MIN_LOG_LEVEL: u8 = 1;
    }
}
