use crate::pages::layout::{html_escape, text_page};

pub fn render_contact(contact_email: &str) -> String {
    let email = html_escape(contact_email);
    text_page(
        "Contact Us",
        &format!(
            r#"<p class="text-zinc-300">Have questions? Email <a href="mailto:{email}" class="underline">{email}</a>.</p>"#,
            email = email,
        ),
    )
}

pub fn render_refunds() -> String {
    text_page(
        "Refund Policy",
        r#"<p class="text-zinc-300">Pre-orders may be refunded in full until fulfillment of their batch begins. Once candles ship, orders are final.</p>"#,
    )
}

pub fn render_terms() -> String {
    text_page(
        "Terms of Sale",
        r#"<div class="space-y-3 text-zinc-300">
    <p>God Candles are sold as pre-orders. Each pre-order belongs to a numbered batch and ships within 4–6 weeks of that batch opening.</p>
    <p>Payments are processed by third-party checkout providers. We never see or store your card or wallet details.</p>
    <p>Tithing is a voluntary addition to your order and has no effect on fulfillment.</p>
    <p>Prayer candles are a novelty item. Past performance of prayer candles does not guarantee future results.</p>
</div>"#,
    )
}
