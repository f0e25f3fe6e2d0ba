//! Fixtures shared by the integration tests.

/// One line of an order: album order number and the price cell text.
pub struct AlbumRow<'a> {
    pub album_order_number: &'a str,
    pub price: &'a str,
}

/// Renders an order details page in the panel's layout, rows in the given order.
pub fn order_details_page(rows: &[AlbumRow]) -> String {
    let rows = rows
        .iter()
        .map(|row| {
            format!(
                r#"<tr><td class="price"><span>{}</span></td><td id="{}">{}</td></tr>"#,
                row.price, row.album_order_number, row.album_order_number
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<!DOCTYPE html>\n<html><head><title>Order details</title></head><body>\n<table>\n<tbody>\n{}\n</tbody>\n</table>\n</body></html>",
        rows
    )
}
