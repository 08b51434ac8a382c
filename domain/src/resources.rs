pub const PROCESSING_NOTICES_TXT: &str = include_str!("../resources/processing-notices.txt");
