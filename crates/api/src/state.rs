use sinkhole_dns_application::ClassificationService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<ClassificationService>,
}
