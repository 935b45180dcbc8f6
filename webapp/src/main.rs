use tracing::{Level, error};

mod page;
mod ready;

use page::WebPage;

fn attach_page(page: WebPage) {
    let config = page::config::read_config(page.document());

    if let Err(err) = common::attach(&page, &config) {
        error!("failed to attach sidebar: {err}");
    }
}

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    let page = match WebPage::new() {
        Ok(page) => page,
        Err(err) => {
            error!("{err}");
            return;
        }
    };

    let document = page.document().clone();

    if let Err(err) = ready::on_ready(&document, move || attach_page(page)) {
        error!("{err}");
    }
}
