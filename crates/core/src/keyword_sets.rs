use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::normalize::normalize;

#[rustfmt::skip]
pub const PRODUCTIVE_KEYWORDS: &[&str] = &[
    "problema", "erro", "bug", "suporte", "ajuda", "urgente", "crítico",
    "solicitação", "pedido", "requisição", "atualização", "status",
    "dúvida", "pergunta", "consulta", "informação", "detalhes",
    "reclamação", "reembolso", "cancelamento", "modificação",
    "técnico", "sistema", "aplicação", "software", "hardware",
    "conta", "pagamento", "fatura", "boleto", "transferência",
    "serviço", "servicos", "catálogo", "catalogo", "apresentação",
    "apresentacao", "informacoes", "informações", "valor",
    "valores", "preço", "precos", "preco", "preços",
    "contrato", "contratação", "contratacao", "proposta", "orçamento", "orcamento",
    "negociação", "negociacao", "documentação", "documentacao", "documento", "assinatura",
    "envio", "recebimento", "processamento", "aprovação", "aprovacao", "homologação", "homologacao",
    "implantação", "implantacao", "treinamento", "agendamento", "agendar", "marcação", "marcacao",
    "resposta", "retorno", "feedback", "solução", "solucao", "ajuste", "correção", "correcao",
    "atendimento", "relatório", "relatorio", "análise", "analise", "relacionamento", "progresso",
    "andamento", "finalização", "finalizacao", "conclusão", "conclusao", "implementação", "implementacao",
    "atualizar", "atualizado", "pendência", "pendencia", "regularização", "regularizacao",
    "cadastro", "recadastro", "alteração", "alteracao", "inclusão", "inclusao", "exclusão", "exclusao",
    "ajustes", "melhoria", "melhorias", "otimização", "otimizacao", "planejamento", "planejar",
    "cronograma", "prazo", "prazos", "entrega", "entregas", "disponibilidade", "disponível", "disponivel",
    "implementado", "implementada", "implantado", "implantada", "solicitado", "solicitada",
    "confirmar", "confirmação", "confirmacao", "comprovação", "comprovacao", "comprovante",
    "atualizações", "atualizacoes", "esclarecimento", "esclarecimentos", "explicação", "explicacao",
    "demanda", "demandas", "prioridade", "prioridades", "urgência", "urgencia", "emergência", "emergencia",
    "resolução", "resolucao", "resolvido", "resolvida", "tratativa", "tratativas", "monitoramento",
    "monitorar", "acompanhamento", "acompanhar", "protocolo", "registro", "registrar", "solicitante",
    "responsável", "responsavel", "responsáveis", "responsaveis", "departamento", "setor", "equipe",
    "colaborador", "colaboradora", "colaboradores", "cliente", "clientes", "usuário", "usuario", "usuários", "usuarios",
];

#[rustfmt::skip]
pub const UNPRODUCTIVE_KEYWORDS: &[&str] = &[
    "feliz", "natal", "ano novo", "parabéns", "comemoração", "sucesso", "vida",
    "saúde", "prosperidade", "alegria", "amor", "paz",
    "bênção", "deus", "fé", "esperança", "carinho",
    "beijo", "saudação", "cumprimento", "saudade", "agradecer",
    // greetings and small-talk questions
    "como vai", "tudo bem", "bom dia", "boa tarde", "boa noite",
    "espero que esteja bem", "espero que todos estejam bem",
    "como estão", "como está", "como estão as coisas",
    "tudo certo", "tudo tranquilo", "novidades", "alguma novidade",
    "só para saber", "apenas para saber", "curiosidade",
    "só queria saber", "apenas queria saber", "tudo ok",
    "tudo em ordem", "como foi o final de semana", "como foi o fim de semana",
    "como foi o feriado", "como foi o dia", "como foi a semana",
    "como estão as coisas por aí", "como estão as coisas ai",
    "como estão todos", "como está a família", "como está a equipe",
    "espero que esteja tudo bem", "espero que esteja tudo certo",
    "espero que esteja tudo tranquilo", "espero que esteja tudo em ordem",
    "só passando para", "apenas passando para", "passando para desejar",
    "passando para saber", "passando para perguntar",
    "tudo em paz", "tudo tranquilo por aí", "tudo tranquilo ai",
    "tudo ótimo", "tudo maravilhoso", "tudo excelente",
    "como posso ajudar", "posso ajudar em algo", "precisa de algo",
    "precisa de alguma coisa", "precisa de ajuda", "precisa de apoio",
    "precisa de suporte", "precisa de mim", "precisa de alguma informação",
    "precisa de alguma novidade", "precisa de alguma atualização",
    "só queria perguntar", "apenas queria perguntar",
    "só para perguntar", "apenas para perguntar",
    "só para confirmar", "apenas para confirmar",
    "só para avisar", "apenas para avisar",
    "só para lembrar", "apenas para lembrar",
    "só para agradecer", "apenas para agradecer",
    "só para cumprimentar", "apenas para cumprimentar",
    "só para desejar", "apenas para desejar",
    "tudo bem com você", "tudo bem com voces", "tudo bem com vocês",
    "tudo bem com a equipe", "tudo bem com a família",
    "como estão todos por aí", "como estão todos ai",
    "como estão todos vocês", "como estão todos voces",
    "como estão todos da equipe", "como estão todos da família",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordSetKind {
    Productive,
    Unproductive,
}

/// Keyword entry that no normalized token can ever equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreachableEntry {
    pub set: KeywordSetKind,
    pub entry: String,
    /// What the entry would have to be to match a token, if a single token at all.
    pub normalized: String,
}

#[derive(Debug, Deserialize)]
struct KeywordSetsFile {
    productive: Vec<String>,
    unproductive: Vec<String>,
}

/// The two immutable keyword sets consulted by the classifier.
///
/// Entries are matched verbatim against normalized tokens, so phrases and
/// accented spellings never match. See [`KeywordSets::unreachable_entries`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSets {
    productive: HashSet<String>,
    unproductive: HashSet<String>,
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self::new(
            PRODUCTIVE_KEYWORDS.iter().copied(),
            UNPRODUCTIVE_KEYWORDS.iter().copied(),
        )
    }
}

impl KeywordSets {
    pub fn new<P, U>(productive: P, unproductive: U) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        Self {
            productive: productive.into_iter().map(Into::into).collect(),
            unproductive: unproductive.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads `{"productive": [...], "unproductive": [...]}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("failed reading keyword sets at {}", path.as_ref().display())
        })?;
        let parsed: KeywordSetsFile =
            serde_json::from_str(&raw).context("invalid keyword sets json")?;

        if parsed.productive.is_empty() && parsed.unproductive.is_empty() {
            anyhow::bail!("keyword sets file defines no keywords");
        }

        Ok(Self::new(parsed.productive, parsed.unproductive))
    }

    pub fn productive(&self) -> &HashSet<String> {
        &self.productive
    }

    pub fn unproductive(&self) -> &HashSet<String> {
        &self.unproductive
    }

    pub fn set(&self, kind: KeywordSetKind) -> &HashSet<String> {
        match kind {
            KeywordSetKind::Productive => &self.productive,
            KeywordSetKind::Unproductive => &self.unproductive,
        }
    }

    pub fn len(&self) -> usize {
        self.productive.len() + self.unproductive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries that are not already a single normalized token.
    pub fn unreachable_entries(&self) -> Vec<UnreachableEntry> {
        let mut entries = Vec::new();

        for kind in [KeywordSetKind::Unproductive, KeywordSetKind::Productive] {
            for entry in self.set(kind) {
                let normalized = normalize(entry);
                if normalized != *entry || entry.split_whitespace().count() != 1 {
                    entries.push(UnreachableEntry {
                        set: kind,
                        entry: entry.clone(),
                        normalized,
                    });
                }
            }
        }

        entries.sort_by(|a, b| a.entry.cmp(&b.entry));
        entries
    }
}
