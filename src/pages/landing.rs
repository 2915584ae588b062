use url::Url;

use crate::models::order_models::{OrderSelection, PaymentMethod, ShippingRegion, BUNDLES};
use crate::pages::layout::{html_escape, page_shell};
use crate::utils::pricing::{format_usd, PriceBreakdown, CUSTOM_BLESSING_COST};

const BATCH_LABEL: &str = "Batch 2";

// Refreshes the countdown line once per second from the ticker endpoint.
const COUNTDOWN_JS: &str = r#"
(function () {
    var el = document.getElementById('countdown');
    if (!el) { return; }
    setInterval(function () {
        fetch('/api/countdown')
            .then(function (r) { return r.json(); })
            .then(function (d) { el.textContent = el.dataset.label + ' opens in ' + d.remaining; })
            .catch(function () {});
    }, 1000);
})();
"#;

pub struct LandingContext<'a> {
    pub selection: &'a OrderSelection,
    pub breakdown: &'a PriceBreakdown,
    pub countdown: &'a str,
    pub email_list_endpoint: Option<&'a Url>,
    /// Blocking message shown above the order summary, e.g. a missing checkout link.
    pub notice: Option<&'a str>,
}

pub fn render_landing_page(ctx: &LandingContext) -> String {
    let body = format!(
        r#"<main class="min-h-screen bg-black text-white">
{hero}
{product}
</main>
<script>{script}</script>"#,
        hero = render_hero(ctx),
        product = render_product_card(ctx),
        script = COUNTDOWN_JS,
    );
    page_shell("God Candle", &body)
}

fn render_hero(ctx: &LandingContext) -> String {
    let selection = ctx.selection;
    let link_for = |method: PaymentMethod| {
        let mut next = selection.clone();
        next.payment_method = method;
        format!("/?{}#order", html_escape(&next.to_query_string()))
    };
    let ring = |method: PaymentMethod, class: &'static str| {
        if selection.payment_method == method { class } else { "" }
    };

    let email_capture = match ctx.email_list_endpoint {
        Some(endpoint) => format!(
            r#"<form action="{action}" method="post" class="mt-5 flex flex-col items-stretch gap-2 sm:flex-row">
            <input type="email" required name="email" placeholder="Enter email for early access"
                class="w-full rounded-xl border border-white/10 bg-white/5 px-4 py-3 text-white placeholder:text-zinc-500 outline-none" />
            <button class="rounded-xl bg-white px-5 py-3 font-semibold text-black hover:bg-white/90">Reserve {batch}</button>
        </form>"#,
            action = html_escape(endpoint.as_str()),
            batch = BATCH_LABEL,
        ),
        None => r#"<p class="mt-5 text-sm text-zinc-400">Early access signup opens soon.</p>"#.to_string(),
    };

    format!(
        r#"<section class="mx-auto max-w-3xl px-4 py-10 sm:py-14">
        <div class="text-center">
            <div class="mb-4 inline-flex items-center gap-2 rounded-full bg-emerald-600/20 px-4 py-1 text-sm text-emerald-300">
                <span>🔥 BATCH 1: SOLD OUT</span>
            </div>
            <h1 class="text-3xl font-bold tracking-tight sm:text-4xl">God Candle</h1>
            <p class="mt-2 text-zinc-300">Digital-first pre-orders. Launching Oct 1, 2025.</p>
            <p id="countdown" data-label="{batch}" class="mt-3 text-lg font-semibold">{batch} opens in {countdown}</p>
        </div>
        <div class="mt-6 grid grid-cols-1 gap-3 sm:grid-cols-2">
            <a href="{usd_link}" class="block w-full rounded-2xl border border-white/10 bg-white px-6 py-3 text-center font-semibold text-black {usd_ring}">Pre-Order (Card/Apple Pay)</a>
            <a href="{crypto_link}" class="block w-full rounded-2xl border border-emerald-400/20 bg-emerald-500/20 px-6 py-3 text-center font-semibold text-emerald-200 {crypto_ring}">Pre-Order (USDC/ETH/BTC)</a>
        </div>
        {email_capture}
        <p class="mt-2 text-xs text-zinc-400">Delivery window for {batch}: 4–6 weeks. Full refunds available until fulfillment starts.</p>
    </section>"#,
        batch = BATCH_LABEL,
        countdown = html_escape(ctx.countdown),
        usd_link = link_for(PaymentMethod::Usd),
        crypto_link = link_for(PaymentMethod::Crypto),
        usd_ring = ring(PaymentMethod::Usd, "ring-2 ring-white"),
        crypto_ring = ring(PaymentMethod::Crypto, "ring-2 ring-emerald-300"),
        email_capture = email_capture,
    )
}

fn render_product_card(ctx: &LandingContext) -> String {
    let selection = ctx.selection;
    let theme = selection.mood.theme();

    let toggle_link = {
        let mut next = selection.clone();
        next.mood = selection.mood.toggled();
        format!("/?{}#order", html_escape(&next.to_query_string()))
    };

    let ticker_field = if selection.custom_blessing {
        format!(
            r#"<div>
                <label for="ticker" class="block text-sm text-zinc-300">Your Memecoin Ticker</label>
                <input id="ticker" type="text" name="ticker" placeholder="$FART" value="{ticker}"
                    class="mt-1 w-full rounded-md border border-white/10 bg-black/40 px-3 py-2 text-white" />
            </div>"#,
            ticker = html_escape(&selection.custom_ticker),
        )
    } else {
        String::new()
    };

    let notice = match ctx.notice {
        Some(message) => format!(
            r#"<div role="alert" class="rounded-md border border-yellow-400/40 bg-yellow-500/10 p-3 text-sm text-yellow-200">⚠️ {}</div>"#,
            html_escape(message)
        ),
        None => String::new(),
    };

    let checkout_icon = match selection.payment_method {
        PaymentMethod::Usd => "📈",
        PaymentMethod::Crypto => "₿",
    };

    format!(
        r#"<section id="order" class="mx-auto max-w-xl px-4 pb-16">
        <div class="rounded-2xl border border-white/10 bg-white/5 p-4 sm:p-6">
            <div class="mb-4 flex items-center justify-between">
                <div>
                    <h2 class="text-xl font-semibold">The Almighty Candle</h2>
                    <p class="mt-1 text-sm {mood_text}">{tagline}</p>
                </div>
                <span class="text-2xl {accent}" aria-hidden="true">🔥</span>
            </div>
            <div class="mb-4 flex items-center justify-between gap-3">
                <span class="text-sm text-zinc-300">Bear Mode</span>
                <a id="bear" href="{toggle_link}" role="switch" aria-checked="{bearish}"
                    class="relative inline-flex h-6 w-11 items-center rounded-full transition {toggle_track}">
                    <span class="inline-block h-5 w-5 transform rounded-full bg-white transition {toggle_knob}"></span>
                </a>
            </div>
            <form method="get" action="/" class="grid gap-4">
                <input type="hidden" name="mood" value="{mood}" />
                <div>
                    <label for="quantity" class="block text-sm text-zinc-300">Choose Your Bundle</label>
                    <select id="quantity" name="quantity" onchange="this.form.submit()"
                        class="mt-1 w-full rounded-md border border-white/10 bg-black/40 px-3 py-2 text-white">{bundle_options}</select>
                </div>
                <div>
                    <label for="region" class="block text-sm text-zinc-300">Shipping Region</label>
                    <select id="region" name="region" onchange="this.form.submit()"
                        class="mt-1 w-full rounded-md border border-white/10 bg-black/40 px-3 py-2 text-white">{region_options}</select>
                    <p class="mt-1 text-xs text-zinc-500">+$2 per additional item</p>
                </div>
                <div class="flex items-center gap-2">
                    <input id="custom" type="checkbox" name="custom" value="on" onchange="this.form.submit()" {custom_checked}
                        class="h-4 w-4 rounded border-white/20 bg-black/40" />
                    <label for="custom" class="text-sm text-zinc-300">Add Custom Memecoin Blessing (+{custom_price})</label>
                </div>
                {ticker_field}
                <div>
                    <label for="payment" class="block text-sm text-zinc-300">Payment Method</label>
                    <select id="payment" name="payment" onchange="this.form.submit()"
                        class="mt-1 w-full rounded-md border border-white/10 bg-black/40 px-3 py-2 text-white">{payment_options}</select>
                </div>
                <div>
                    <label for="tithing" class="block text-sm text-zinc-300">Optional Tithing</label>
                    <div class="mt-1 flex items-center gap-2">
                        <input id="tithing" type="number" name="tithing" min="0" step="0.01" inputmode="decimal"
                            placeholder="Additional blessing amount" value="{tithing_value}" onchange="this.form.submit()"
                            class="w-full rounded-md border border-white/10 bg-black/40 px-3 py-2 text-white" />
                        <span class="{accent}" aria-hidden="true">🎁</span>
                    </div>
                </div>
                <noscript><button type="submit" class="rounded-md border border-white/20 px-3 py-2 text-sm">Update total</button></noscript>
                {notice}
                {summary}
                <button type="submit" formaction="/checkout" formmethod="post" formnovalidate
                    class="mt-2 inline-flex w-full items-center justify-center gap-2 rounded-xl px-4 py-3 font-semibold {button_class}">
                    <span aria-hidden="true">{checkout_icon}</span> Place Blessed Order
                </button>
                <p class="mt-3 text-center text-xs {accent}">⚠️ Pre-orders fund production. 4–6 week delivery. Full refunds available until fulfillment begins.</p>
            </form>
        </div>
        <div class="mt-8 space-y-2 text-center text-xs text-zinc-500">
            <p>Past performance of prayer candles does not guarantee future results.</p>
            <p>Each candle blessed with genuine {blessing_word} ✨</p>
            <p>We ship worldwide (additional fees may apply).</p>
            <p class="mt-2"><a href="/terms" class="underline">Terms</a> · <a href="/refunds" class="underline">Refunds</a> · <a href="/contact" class="underline">Contact</a></p>
        </div>
    </section>"#,
        mood_text = theme.text_class,
        tagline = theme.tagline,
        accent = theme.accent_class,
        toggle_link = toggle_link,
        bearish = selection.mood.is_bearish(),
        toggle_track = theme.toggle_track,
        toggle_knob = theme.toggle_knob,
        mood = selection.mood.code(),
        bundle_options = bundle_options(selection.quantity),
        region_options = region_options(selection.shipping_region),
        custom_checked = if selection.custom_blessing { "checked" } else { "" },
        custom_price = format_usd(CUSTOM_BLESSING_COST),
        ticker_field = ticker_field,
        payment_options = payment_options(selection.payment_method),
        tithing_value = selection.tithing_amount,
        notice = notice,
        summary = render_summary(ctx),
        button_class = theme.button_class,
        checkout_icon = checkout_icon,
        blessing_word = theme.blessing_word,
    )
}

fn render_summary(ctx: &LandingContext) -> String {
    let b = ctx.breakdown;
    let row = |label: &str, value: String| {
        format!(
            r#"<div class="mt-2 flex items-center justify-between text-sm"><span class="text-zinc-300">{}</span><span class="font-semibold">{}</span></div>"#,
            label, value
        )
    };

    let mut rows = row("Price per candle", format_usd(b.price_per_unit));
    if ctx.selection.custom_blessing {
        let label = match ctx.selection.blessing_ticker() {
            Some(ticker) => format!("Custom blessing ({})", html_escape(ticker)),
            None => "Custom blessing".to_string(),
        };
        rows.push_str(&row(&label, format_usd(b.custom_cost)));
    }
    rows.push_str(&row("Shipping", format_usd(b.shipping_cost)));
    if b.tithing > 0.0 {
        rows.push_str(&row("Tithing", format_usd(b.tithing)));
    }

    format!(
        r#"<div id="summary" class="rounded-md p-4 {bg}">
                    {rows}
                    <div class="mt-3 border-t border-white/10 pt-3 text-lg font-bold">
                        <div class="flex items-center justify-between"><span>Total</span><span id="total">${total}</span></div>
                    </div>
                </div>"#,
        bg = ctx.selection.mood.theme().summary_bg,
        rows = rows,
        total = b.display_total(),
    )
}

fn bundle_options(quantity: u32) -> String {
    let mut options: String = BUNDLES
        .iter()
        .map(|bundle| option(&bundle.quantity.to_string(), bundle.label, bundle.quantity == quantity))
        .collect();
    // Keep a hand-typed quantity selectable instead of silently snapping it to a bundle.
    if !BUNDLES.iter().any(|bundle| bundle.quantity == quantity) {
        options.push_str(&option(
            &quantity.to_string(),
            &format!("{} Candles", quantity),
            true,
        ));
    }
    options
}

fn region_options(selected: ShippingRegion) -> String {
    ShippingRegion::ALL
        .iter()
        .map(|region| {
            option(
                region.code(),
                &format!("{} ({})", region.label(), format_usd(region.base_rate())),
                *region == selected,
            )
        })
        .collect()
}

fn payment_options(selected: PaymentMethod) -> String {
    [PaymentMethod::Usd, PaymentMethod::Crypto]
        .iter()
        .map(|method| option(method.code(), method.label(), *method == selected))
        .collect()
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        html_escape(value),
        if selected { " selected" } else { "" },
        html_escape(label),
    )
}
