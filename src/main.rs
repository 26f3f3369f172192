use dotenv::dotenv;
use geoquiz::adapters::inbound::create_client;
use geoquiz::adapters::outbound::country_store::init_country_store;
use geoquiz::adapters::outbound::geography_store::init_geography_store;
use geoquiz::domain::app::App;
use geoquiz::ports::inbound::client::Client;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let app = App::new(init_country_store(), init_geography_store());
    let mut client = create_client(app);
    client.run().await;
}
