//! Drive a dashboard session and print the final frame as HTML.

use nexus_core::html::frame_regions;
use nexus_core::{ProjectStore, ViewController, ViewId, sample_projects};

fn main() {
    let mut controller = ViewController::new(
        ProjectStore::with_projects(sample_projects()),
        ViewId::Dashboard,
    );

    let _ = controller.switch_view("goals");
    let _ = controller.open_create_dialog();
    if let Err(err) = controller.submit_new_project("   ") {
        println!("<!-- rejected: {err} -->");
    }
    let _ = controller
        .edit_prompt("Migrate the billing service to the new cluster");
    match controller.submit_prompt() {
        Ok((record, _)) => {
            println!("<!-- created #{}: {} -->", record.id, record.name)
        },
        Err(err) => println!("<!-- rejected: {err} -->"),
    }

    for (region, html) in frame_regions(controller.frame()) {
        println!("<!-- #{region} -->");
        println!("{html}");
    }
}
