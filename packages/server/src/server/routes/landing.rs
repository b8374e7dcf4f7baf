use axum::response::Html;

/// Minimal landing page pointing at the API surface.
pub async fn landing_handler() -> Html<&'static str> {
    Html(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><title>Keyword Extraction API</title></head>\n\
         <body>\n\
         <h1>Keyword Extraction API</h1>\n\
         <ul>\n\
         <li><code>POST /api/extract</code> - extract keywords from text</li>\n\
         <li><code>POST /api/extract/all</code> - compare all extraction backends</li>\n\
         <li><code>GET /api/models</code> - backend catalog</li>\n\
         <li><code>GET /api/health</code> - health check</li>\n\
         </ul>\n\
         </body>\n\
         </html>\n",
    )
}
