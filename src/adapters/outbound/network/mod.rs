mod devops_client;
mod rest_client;

pub use devops_client::DevOpsClient;
pub use rest_client::{ApiResponse, RestClient};
