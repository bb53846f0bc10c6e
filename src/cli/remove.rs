use crate::error::Result;
use crate::image::{Selector, format_rows, select_images};
use crate::runtime::ImageRuntime;
use crate::utils::format_removal_message;

/// List images, let the user pick some, and force-remove the picks.
///
/// Nothing is removed when the listing is empty or the user selects nothing.
pub async fn execute<R, S>(runtime: &R, selector: &S, color: bool) -> Result<()>
where
    R: ImageRuntime,
    S: Selector,
{
    let images = runtime.list_images().await?;
    if images.is_empty() {
        println!("No images found.");
        return Ok(());
    }

    let rows = format_rows(&images, color);
    let selection = select_images(selector, &rows).await;
    if selection.is_empty() {
        log::debug!("no images selected");
        return Ok(());
    }

    log::info!("{}", format_removal_message(selection.ids()));
    runtime.remove_images(selection.ids()).await
}
