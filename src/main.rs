mod app;
mod modules;
mod types;
mod utils;

use crate::app::App;

#[tokio::main]
async fn main() {
    let app = App::new().await;
    app.serve().await;
}
