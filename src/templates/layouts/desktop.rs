use maud::{html, Markup, DOCTYPE};

const STYLES: &str = r#"
body { margin: 0; font-family: Arial, sans-serif; background: #f8fafc; color: #1f2937; }
header { display: flex; align-items: center; justify-content: space-between; padding: 1rem 2rem; background: white; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
header a { color: #3b82f6; text-decoration: none; font-weight: bold; }
.container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.narrow { max-width: 720px; }
.card { background: white; border-radius: 12px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); padding: 1.5rem; }
.products-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 2rem; }
.product-card { background: white; border-radius: 12px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); overflow: hidden; }
.product-image { position: relative; height: 200px; background: #f3f4f6; display: flex; align-items: center; justify-content: center; font-size: 3rem; }
.sale-badge { position: absolute; top: 10px; left: 10px; background: #ef4444; color: white; padding: 0.5rem 1rem; border-radius: 4px; font-size: 0.875rem; font-weight: bold; }
.product-info { padding: 1.5rem; }
.product-category { color: #6b7280; font-size: 0.875rem; }
.product-price { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1rem; }
.current-price { font-size: 1.5rem; font-weight: bold; }
.old-price { font-size: 1.125rem; color: #9ca3af; text-decoration: line-through; }
.product-meta { display: flex; justify-content: space-between; font-size: 0.875rem; color: #6b7280; }
.sku { font-family: monospace; }
.source-bar { display: flex; align-items: center; justify-content: space-between; gap: 1rem; margin-bottom: 1.5rem; }
.source-live { color: #059669; font-weight: bold; }
.source-fallback { color: #d97706; font-weight: bold; }
.notice { background: #fef3c7; border: 1px solid #fcd34d; border-radius: 8px; padding: 0.75rem 1rem; margin-bottom: 1.5rem; }
.loading { text-align: center; font-size: 1.25rem; color: #6b7280; padding: 4rem; }
.attempt-log { margin-top: 3rem; font-size: 0.875rem; color: #6b7280; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Accessories Store" }
                style { (maud::PreEscaped(STYLES)) }
            }
            body {
                header {
                    a href="/" { "🛍️ Accessories Store" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/products" { "Products" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
