//! Fixed business-presentation texts.
//!
//! Every canned reply is templated with the configured business name and
//! site URL so the presentation follows configuration changes without a
//! restart.

use crate::settings::Settings;

/// System instruction for the connectivity probe.
pub const PROBE_SYSTEM: &str = "Responda apenas: OK";

/// Customer message for the connectivity probe.
pub const PROBE_MESSAGE: &str = "Teste";

/// System instruction sent to the reply-generation provider.
pub fn system_prompt(settings: &Settings) -> String {
    format!(
        "Você é SORA 🍣, atendente virtual do {business}.\n\
         \n\
         Missão:\n\
         Induzir o cliente a finalizar o pedido exclusivamente pelo site:\n\
         {site}\n\
         \n\
         Regras fixas:\n\
         - Nunca aceite pedidos fora do site\n\
         - Nunca prometa pagamento na entrega\n\
         - Sempre mencionar Pix e cartão\n\
         - Sempre transmitir segurança e profissionalismo\n\
         - Nunca repetir a mesma explicação de forma idêntica\n\
         - Respostas curtas e diretas (máximo 3 linhas quando possível)\n\
         \n\
         Contexto do negócio:\n\
         - 4 unidades físicas em Curitiba\n\
         - Entrega em toda Curitiba e região\n\
         - Cardápio completo apenas no site\n\
         - Aceitamos Pix e cartão\n\
         \n\
         Estilo:\n\
         - Respostas humanas, curtas e claras\n\
         - Tom calmo e confiável\n\
         - Emojis com moderação (máximo 2 por mensagem)\n\
         - Seja simpático mas profissional\n\
         \n\
         IMPORTANTE: Sempre direcione para o site {site} para qualquer pedido ou dúvida sobre cardápio.",
        business = settings.business_name,
        site = settings.site_url,
    )
}

/// Fixed welcome sent on the first inbound message of a conversation.
pub fn welcome_message(settings: &Settings) -> String {
    format!(
        "Oi! 😊 Seja bem-vindo ao {business} 🍣\n\
         \n\
         👉 Nosso cardápio completo e os pedidos são feitos pelo site:\n\
         {site}\n\
         \n\
         Aceitamos Pix e cartão 💳\n\
         Entregamos em toda Curitiba e região, com 4 unidades físicas.\n\
         \n\
         Se quiser, posso te ajudar a escolher 😉",
        business = settings.business_name,
        site = settings.site_url,
    )
}

/// Fixed rebuttal for distrust objections, sent at most once per
/// conversation.
pub fn distrust_rebuttal(settings: &Settings) -> String {
    format!(
        "Entendo a preocupação 😊\n\
         Trabalhamos com 4 unidades físicas em Curitiba, e todos os pedidos são registrados pelo site oficial:\n\
         👉 {site}\n\
         \n\
         O pagamento é por Pix ou cartão, com confirmação imediata 🍣",
        site = settings.site_url,
    )
}

/// Deterministic reply used whenever generation fails.
pub fn fallback_reply(settings: &Settings) -> String {
    format!(
        "Desculpe, tive um problema técnico. Por favor, acesse nosso site: {site} 🍣",
        site = settings.site_url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_carry_site_and_business() {
        let settings = Settings {
            site_url: "https://example.shop".to_string(),
            business_name: "Example".to_string(),
            ..Settings::default()
        };

        let welcome = welcome_message(&settings);
        assert!(welcome.contains("Example"));
        assert!(welcome.contains("https://example.shop"));

        let prompt = system_prompt(&settings);
        assert!(prompt.contains("Example"));
        assert!(prompt.contains("https://example.shop"));

        assert!(distrust_rebuttal(&settings).contains("https://example.shop"));
        assert!(fallback_reply(&settings).contains("https://example.shop"));
    }

    #[test]
    fn test_welcome_mentions_payment_methods() {
        let welcome = welcome_message(&Settings::default());
        assert!(welcome.contains("Pix"));
        assert!(welcome.contains("cartão"));
    }
}
