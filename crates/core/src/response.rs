use crate::models::Category;

pub const SERVICE_INQUIRY_RESPONSE: &str = "Olá! Agradecemos seu interesse nos serviços da AutoU. Em breve, nossa equipe enviará um catálogo ou apresentação com todas as informações solicitadas. Caso tenha dúvidas específicas, estamos à disposição!";

pub const REQUEST_ACK_RESPONSE: &str = "Olá! Recebemos sua solicitação e estamos analisando o seu caso. Nossa equipe AutoU irá retornar com uma resposta detalhada em breve. Agradecemos pelo contato!";

pub const WELL_WISHES_RESPONSE: &str = "Olá! Agradecemos sua mensagem e os votos positivos. A equipe AutoU deseja tudo em dobro para você!";

pub const SUPPORT_OFFER_RESPONSE: &str =
    "Olá! Recebemos sua mensagem. Caso precise de suporte, estamos à disposição. Equipe AutoU.";

/// Matched as substrings of the lowercased raw text, accents intact.
pub const SERVICE_INQUIRY_TERMS: &[&str] = &[
    "serviço",
    "servicos",
    "catálogo",
    "catalogo",
    "apresentação",
    "apresentacao",
    "informação",
    "informacoes",
    "informações",
];

pub fn generate_response(text: &str, category: Category) -> &'static str {
    match category {
        Category::Productive if is_service_inquiry(text) => SERVICE_INQUIRY_RESPONSE,
        Category::Productive => REQUEST_ACK_RESPONSE,
        Category::Unproductive => WELL_WISHES_RESPONSE,
        Category::Neutral => SUPPORT_OFFER_RESPONSE,
    }
}

fn is_service_inquiry(text: &str) -> bool {
    let lower = text.to_lowercase();
    SERVICE_INQUIRY_TERMS.iter().any(|term| lower.contains(term))
}
