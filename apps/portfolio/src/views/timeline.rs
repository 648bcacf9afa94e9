use askama::Template;

use crate::errors::AppError;
use crate::models::portfolio::TimelineEvent;

/// The timeline is a fragment, appended below the Home view.
#[derive(Template)]
#[template(path = "timeline.html")]
struct TimelineTemplate<'a> {
    events: &'a [TimelineEvent],
}

pub fn render(events: &[TimelineEvent]) -> Result<String, AppError> {
    Ok(TimelineTemplate { events }.render()?)
}
