/// GET /hello
///
/// Fixed greeting, independent of the request.
pub async fn hello() -> &'static str {
    "Hello World!"
}
