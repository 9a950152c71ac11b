pub mod params;

pub use params::{
    CheckoutRequest, CheckoutResponse, HealthResponse, PdfRequest, ScanRequest, ScanSuccessParams,
};
