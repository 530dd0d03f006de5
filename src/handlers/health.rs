/// Liveness probe for GET /.
pub async fn hello_backoffice() -> &'static str {
    "Hello from Backoffice Backend!"
}
