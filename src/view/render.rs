//! HTML rendering
//!
//! Every user-supplied text field is escaped before insertion into
//! markup; prices render with exactly two decimals; an empty product
//! list renders a distinct placeholder instead of an empty grid.

use crate::store::Product;

use super::state::Message;

/// Escapes `& < > " '` for safe insertion into markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Formats a price with exactly two decimal places.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Renders one product card.
pub fn render_product_card(product: &Product) -> String {
    let stock_class = if product.in_stock {
        "stock-in"
    } else {
        "stock-out"
    };
    let stock_label = if product.in_stock {
        "In Stock"
    } else {
        "Out of Stock"
    };

    let mut out = String::with_capacity(256);
    out.push_str("<div class=\"product-card\" data-id=\"");
    out.push_str(&escape_html(&product.id));
    out.push_str("\">\n");
    out.push_str("  <h3 class=\"product-title\">");
    out.push_str(&escape_html(&product.title));
    out.push_str("</h3>\n");
    out.push_str("  <span class=\"product-category\">");
    out.push_str(&escape_html(&product.category));
    out.push_str("</span>\n");
    out.push_str("  <div class=\"product-price\">$");
    out.push_str(&format_price(product.price));
    out.push_str("</div>\n");
    out.push_str("  <div class=\"product-stock ");
    out.push_str(stock_class);
    out.push_str("\">");
    out.push_str(stock_label);
    out.push_str("</div>\n");
    out.push_str("</div>");
    out
}

/// Renders the product grid, or the empty-state placeholder when there
/// are no products.
pub fn render_grid(products: &[Product]) -> String {
    if products.is_empty() {
        return "<div class=\"empty-state\">\n  <h3>No products found</h3>\n  \
                <p>Add your first product using the form above!</p>\n</div>"
            .to_string();
    }

    let mut out = String::with_capacity(products.len() * 256);
    for (i, product) in products.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_product_card(product));
    }
    out
}

/// Renders the visible messages.
pub fn render_messages(messages: &[Message]) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str("<div class=\"message ");
        out.push_str(message.kind.as_str());
        out.push_str("\">");
        out.push_str(&escape_html(&message.text));
        out.push_str("</div>\n");
    }
    out
}
