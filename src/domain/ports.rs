use crate::domain::model::{BookingRequest, PaymentMethod, Quote};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Interactive terminal: `prompt` shows a message and reads one line back,
/// `say` just prints. Erroring on end-of-input is the implementor's job.
pub trait Console: Send + Sync {
    fn prompt(&self, message: &str) -> impl std::future::Future<Output = Result<String>> + Send;
    fn say(&self, message: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn cities_file(&self) -> Option<&str>;
    fn seed(&self) -> Option<u64>;
}

/// The four stages of one booking session. `settle` returning `Ok(None)`
/// means the passenger declined payment; only `collect` and `settle` talk to
/// the passenger.
#[async_trait]
pub trait BookingFlow: Send + Sync {
    async fn collect(&self) -> Result<BookingRequest>;
    async fn quote(&self, request: &BookingRequest) -> Result<Quote>;
    async fn settle(&self, quote: &Quote) -> Result<Option<PaymentMethod>>;
    async fn issue(
        &self,
        request: &BookingRequest,
        quote: &Quote,
        method: PaymentMethod,
    ) -> Result<String>;
}
