pub mod string_scanner;
pub use string_scanner::StringScanner;

pub mod number_scanner;
pub use number_scanner::NumberScanner;

pub mod placeholder_scanner;
pub use placeholder_scanner::PlaceholderScanner;
