mod actions;
mod app;
mod config;
mod error;
mod input;
mod logging;
mod nav;
#[cfg(test)]
mod test_utils;
mod theme;
mod views;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use app::App;
use input::{ClickState, InputEvent};
use ratzilla::event::{MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

/// Query the grid container's bounding rect and convert pixel coordinates to a cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    cs.cell_at(
        f64::from(mouse_x) - rect.left(),
        f64::from(mouse_y) - rect.top(),
        (rect.width(), rect.height()),
    )
}

#[cfg(target_arch = "wasm32")]
fn initial_router() -> nav::HashRouter {
    nav::HashRouter
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_router() -> nav::MemoryRouter {
    nav::MemoryRouter::new(nav::Route::Home)
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let (config, config_err) = config::load();
    logging::init(config.log_filter().unwrap_or(log::LevelFilter::Info)).map_err(io::Error::other)?;
    if let Some(e) = config_err {
        log::warn!("ignoring stored config: {}", e);
    }
    log::info!("Communication Coach starting");

    let app = App::new(initial_router(), config.theme());
    log::info!("initial route: {}", app.route());
    let app = Rc::new(RefCell::new(app));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch handler: presses become clicks, moves drive hover styling.
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            let is_click = mouse_event.event == MouseEventKind::Pressed
                && mouse_event.button == MouseButton::Left;
            let is_move = mouse_event.event == MouseEventKind::Moved;
            if !is_click && !is_move {
                return;
            }

            let cs = click_state.borrow();
            let hit = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                .and_then(|(col, row)| cs.hit_test(col, row));
            drop(cs);

            let event = if is_click {
                log::debug!("click at ({}, {}) -> {:?}", mouse_event.x, mouse_event.y, hit);
                match hit {
                    Some(id) => InputEvent::Click(id),
                    None => return,
                }
            } else {
                InputEvent::Hover(hit)
            };
            app.borrow_mut().handle_input(&event);
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            if let Some(event) = InputEvent::from_key(&key_event) {
                app.borrow_mut().handle_input(&event);
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let app = app.borrow();
            let size = f.area();

            // Targets are rebuilt from scratch every frame.
            let mut cs = click_state.borrow_mut();
            cs.reset(size.width, size.height);

            app.render(f, &mut cs);
        }
    });

    Ok(())
}
