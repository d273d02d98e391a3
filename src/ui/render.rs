use crate::ui::app::App;
use crate::ui::details::{details_lines, render_details};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::picker::render_picker_dropdown;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let country = app.selected();

    frame.render_widget(
        Header::new().widget(country, app.mode(), app.fetch_state()),
        header,
    );

    let lines = details_lines(country, app.mode(), app.fetch_state());
    render_details(frame, body, lines, app.details());

    frame.render_widget(Footer::new().widget(footer), footer);

    render_picker_dropdown(frame, app.picker(), country);
}
