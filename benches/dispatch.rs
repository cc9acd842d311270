//! Benchmarks for the Msg → Update → Cmd loop and view construction
//!
//! Run with: cargo bench dispatch

use inplace::config::WidgetConfig;
use inplace::messages::{FormMsg, InputMsg, Msg};
use inplace::model::{FormMethod, Page, Selector, TriggerBundle, TriggerId, WidgetModel};
use inplace::runtime::{Controller, RecordingHost};
use inplace::transport::TransportOutcome;
use inplace::update::update;
use inplace::view::render_page;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_model(triggers: usize) -> WidgetModel {
    let mut bundle = TriggerBundle::new("/rows", "name", FormMethod::Patch, "row");
    bundle.remote = true;
    bundle.tab_to_next = Selector::parse(".row").ok();

    let mut page = Page::new();
    for i in 0..triggers {
        page.push(
            Some(format!("row-{}", i)),
            vec!["row".to_string()],
            format!("Row {}", i),
            bundle.clone(),
        );
    }
    WidgetModel::new(page, WidgetConfig::default())
}

// ============================================================================
// Update-only benchmarks
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn update_open_and_cancel(iterations: usize) {
    let mut model = make_model(10);

    for _ in 0..iterations {
        divan::black_box(update(&mut model, Msg::click(TriggerId(3))));
        divan::black_box(update(&mut model, InputMsg::Escape.into()));
    }

    divan::black_box(&model);
}

#[divan::bench(args = [100, 1000])]
fn update_insert_char(iterations: usize) {
    let mut model = make_model(10);
    update(&mut model, Msg::click(TriggerId(0)));

    for i in 0..iterations {
        let ch = (b'a' + (i % 26) as u8) as char;
        divan::black_box(update(&mut model, InputMsg::InsertChar(ch).into()));
    }

    divan::black_box(&model);
}

// ============================================================================
// Full loop with chaining through every trigger
// ============================================================================

#[divan::bench(args = [10, 100])]
fn chain_through_page(triggers: usize) {
    let mut ctl = Controller::new(make_model(triggers), RecordingHost::new());
    ctl.handle(Msg::click(TriggerId(0)));

    while !ctl.phase().is_idle() {
        ctl.handle(FormMsg::Submit);
        let Some(request) = ctl.host_mut().take_pending() else {
            break;
        };
        ctl.complete(request, TransportOutcome::Success);
    }

    divan::black_box(ctl.model());
}

// ============================================================================
// View construction
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn render_page_html(bencher: divan::Bencher, triggers: usize) {
    let mut model = make_model(triggers);
    update(&mut model, Msg::click(TriggerId(triggers / 2)));

    bencher.bench_local(|| divan::black_box(render_page(&model).to_html()));
}
