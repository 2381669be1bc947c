// src/services/advisor/fallback.rs
//
// Respostas locais do assistente: categorias testadas em ordem fixa de
// prioridade, com sorteio uniforme quando a categoria tem variantes.
// Função pura sobre (pergunta, fonte de aleatoriedade) para os testes
// poderem semear o RNG.

use rand::Rng;

pub const GREETING_RESPONSES: [&str; 3] = [
    "Olá! Sou o assistente de carga de trabalho. Posso ajudar a analisar a alocação de recursos, gerenciar a capacidade do time e otimizar os vínculos com projetos. O que você quer saber sobre a carga do seu time?",
    "Oi! Bem-vindo ao assistente de alocação de recursos. Estou aqui para ajudar a equilibrar cargas de trabalho e atribuições de projeto. Como posso ajudar hoje?",
    "Ei! Pronto para otimizar a carga do seu time? Posso encontrar capacidade livre, cuidar de funcionários sobrecarregados e balancear atribuições. O que você tem em mente?",
];

pub const AVAILABILITY_RESPONSES: [&str; 2] = [
    "🔍 Encontrando capacidade disponível:\n\n• Procure funcionários com menos de 5 dias semanais na seção 'Subutilizados'\n• Use os filtros para ver departamentos ou períodos específicos\n• Consulte os gráficos de carga para uma visão rápida de capacidade\n• Considere redistribuir tarefas dos membros sobrecarregados\n• Acompanhe a capacidade por departamento para achar gargalos\n\n💡 Dica: mantenha 10 a 15% de folga para demandas urgentes.",
    "👥 Análise de capacidade do time:\n\n• Revise os funcionários 'Subutilizados' no painel\n• Filtre por departamento para achar as competências certas\n• Use o gráfico de barras para enxergar lacunas de capacidade\n• Cruze com os cronogramas dos projetos antes de alocar\n• Aproveite a folga para desenvolver o time\n\n✨ Capacidade livre é vantagem competitiva!",
];

pub const OVERLOAD_RESPONSES: [&str; 2] = [
    "⚠️ Gerenciando funcionários sobrecarregados (mais de 5 dias/semana):\n\n1. Identifique as causas: veja quais projetos geram a sobrecarga\n2. Redistribua tarefas: mova o que não é crítico para quem tem folga\n3. Ajuste prazos: estenda cronogramas quando possível\n4. Revise prioridades: alinhe a importância dos projetos com os envolvidos\n5. Acompanhe a tendência: monitore padrões para evitar novas sobrecargas\n\n🎯 Meta: alocações sustentáveis de 5 dias semanais em todo o time.",
    "🚀 Estratégia para resolver sobrecarga:\n\n• Ação imediata: identifique tarefas que podem ser adiadas ou delegadas\n• Rebalanceamento: mova trabalho para quem tem capacidade\n• Otimização de processo: procure ineficiências no fluxo atual\n• Comunicação: alinhe expectativas realistas com os clientes\n• Prevenção: crie alertas antecipados para futuras sobrecargas\n\n📊 Cargas sustentáveis geram mais qualidade e satisfação.",
];

pub const ASSIGNMENT_RESPONSE: &str = "📋 Estratégia de alocação em projetos:\n\n• Combine competências: alinhe a expertise de cada um ao que o projeto exige\n• Balanceie a carga: distribua o trabalho por igual (meta: 5 dias/semana por pessoa)\n• Planeje entre áreas: considere a capacidade dos departamentos em projetos multi-time\n• Acompanhe o progresso: monitore o andamento e ajuste as alocações\n• Mantenha visibilidade: deixe todos informados das atribuições\n\n🔄 Rebalancear com frequência garante o melhor uso dos recursos.";

pub const TEAM_RESPONSE: &str = "👥 Gestão eficaz da carga do time:\n\n• Monitoramento regular: revise a capacidade individual e por departamento toda semana\n• Decisões por dados: use o painel para equilibrar as cargas\n• Mentoria: aproveite quem performa bem para guiar os demais\n• Planejamento sazonal: antecipe variações de demanda\n• Comunicação clara: mantenha transparência sobre capacidade e prioridades\n\n📊 Use os filtros e relatórios do painel para os detalhes do time.";

pub const PROJECT_TEAM_RESPONSE: &str = "👤 Encontrando quem está em cada projeto:\n\n• Relatórios detalhados: a seção de relatórios mostra os vínculos por projeto\n• Filtro por projeto: filtre pelo nome para ver todo o time envolvido\n• Nível de esforço: confira a contribuição e o tempo alocado de cada um\n• Gráficos: a visualização de carga dá a visão geral do time\n• Visão por departamento: veja o envolvimento entre áreas\n\n🔍 Navegue até os relatórios para os dados completos do time do projeto.";

pub const PLANNING_RESPONSE: &str = "🎯 Boas práticas de planejamento de recursos:\n\n1. Análise histórica: estude padrões de carga passados para prever os próximos\n2. Capacidade de reserva: mantenha 10 a 15% de folga para urgências\n3. Treinamento cruzado: desenvolva pessoas versáteis para ter flexibilidade\n4. Contratação: use os dados de carga para embasar novas vagas\n5. Prioridades: revise a importância dos projetos com frequência\n\n📈 Otimização contínua melhora o desempenho e a satisfação do time.";

pub const WORKLOAD_RESPONSE: &str = "📊 Leituras da análise de carga:\n\n• Métricas do painel: acompanhe os padrões de utilização do time\n• Equilíbrio: compare sobrecarregados e subutilizados\n• Por departamento: identifique lacunas de recurso entre áreas\n• Distribuição por projeto: garanta atribuições equilibradas entre iniciativas\n• Tipos de projeto: considere trabalho pago e não pago no planejamento\n\n💡 Use os filtros de período para enxergar tendências e decidir melhor.";

pub const HIGHEST_WORKLOAD_RESPONSE: &str = "📈 Encontrando a maior carga de trabalho:\n\n• Por funcionário: ordene pela carga total nos relatórios detalhados\n• Comparação entre departamentos: veja os resumos por área\n• Por projeto: identifique quais projetos consomem mais recursos\n• Período: use os filtros para semanas, meses ou trimestres específicos\n• Gráficos: as barras mostram a distribuição da carga com clareza\n\n🔍 Confira a visualização de carga para uma leitura imediata.";

pub const HELP_RESPONSE: &str = "🤖 Ajuda do assistente de carga:\n\nPosso ajudar com:\n• Disponibilidade: encontrar quem tem capacidade livre\n• Sobrecarga: estratégias para lidar com funcionários ocupados demais\n• Atribuições: recomendações de alocação em projetos\n• Análise do time: leituras por departamento e por pessoa\n• Planejamento: boas práticas de gestão de recursos\n\n❓ Experimente perguntas como:\n• 'Quais funcionários têm capacidade livre?'\n• 'Como lidar com membros sobrecarregados?'\n• 'Qual a carga por departamento?'";

pub const DEFAULT_RESPONSES: [&str; 3] = [
    "🤖 Assistente de carga pronto!\n\nEstou aqui para otimizar a alocação de recursos do seu time. Posso trazer leituras sobre:\n\n• 👥 Disponibilidade e capacidade dos funcionários\n• ⚠️ Gestão de membros sobrecarregados\n• 📋 Estratégias de atribuição de projetos\n• 🏢 Análise de carga por departamento\n• 🎯 Boas práticas de gestão do time\n\n💬 Pergunte qualquer coisa sobre a carga do seu time!",
    "🚀 Assistente de otimização de recursos ativo!\n\nSou especializado em:\n\n• 🔍 Identificar capacidade livre no time\n• ⚖️ Equilibrar cargas entre projetos\n• 📈 Analisar o desempenho por departamento\n• 📊 Acompanhar tendências de utilização\n• 🎯 Otimizar atribuições de projeto\n\n💡 Qual desafio de recursos posso resolver hoje?",
    "🌟 Gestão inteligente de carga ao seu dispor!\n\nPosso ajudar com:\n\n• 👥 Planejamento e análise de capacidade do time\n• 📋 Alocação estratégica de recursos por projeto\n• 📉 Otimização da distribuição de carga\n• 🏢 Leituras de recursos entre departamentos\n• ⚡ Soluções rápidas para gargalos\n\n🚀 Pronto para maximizar o potencial do seu time?",
];

/// Resposta local determinística para uma pergunta em texto livre.
/// Palavras-chave simples casam por palavra inteira (o teste de substring
/// do sistema antigo fazia "which" casar com "hi"); frases casam por
/// substring do texto normalizado.
pub fn respond<R: Rng>(query: &str, rng: &mut R) -> String {
    let lowered = query.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect();

    let has_word = |keywords: &[&str]| keywords.iter().any(|k| words.contains(k));
    let has_phrase = |phrases: &[&str]| phrases.iter().any(|p| lowered.contains(p));

    // Saudações
    if has_word(&["hello", "hi", "hey", "olá", "ola", "oi"]) {
        return pick(rng, &GREETING_RESPONSES).to_string();
    }

    // Disponibilidade / capacidade
    if has_word(&[
        "available",
        "capacity",
        "free",
        "disponível",
        "disponivel",
        "capacidade",
        "livre",
    ]) {
        return pick(rng, &AVAILABILITY_RESPONSES).to_string();
    }

    // Sobrecarga
    if has_word(&[
        "overload",
        "overloaded",
        "busy",
        "sobrecarga",
        "sobrecarregado",
        "ocupado",
    ]) || has_phrase(&["too much work", "muito trabalho"])
    {
        return pick(rng, &OVERLOAD_RESPONSES).to_string();
    }

    // Atribuição de projetos (condição composta: projeto E alocação)
    if has_word(&["project", "projects", "projeto", "projetos"])
        && has_word(&[
            "assign",
            "assigned",
            "assignment",
            "assignments",
            "allocation",
            "allocations",
            "alocação",
            "alocacao",
            "atribuir",
            "atribuição",
            "atribuicao",
        ])
    {
        return ASSIGNMENT_RESPONSE.to_string();
    }

    // Gestão do time / departamento
    if has_word(&[
        "team",
        "department",
        "manage",
        "management",
        "equipe",
        "departamento",
        "gerenciar",
        "gestão",
        "gestao",
    ]) {
        return TEAM_RESPONSE.to_string();
    }

    // Quem está em qual projeto
    if has_phrase(&[
        "who is working",
        "which employees",
        "project team",
        "quem está",
        "quem esta",
        "quais funcionários",
        "quais funcionarios",
    ]) {
        return PROJECT_TEAM_RESPONSE.to_string();
    }

    // Planejamento e otimização
    if has_word(&[
        "plan",
        "plans",
        "planning",
        "optimize",
        "improve",
        "planejar",
        "planejamento",
        "otimizar",
        "melhorar",
    ]) {
        return PLANNING_RESPONSE.to_string();
    }

    // Análise de carga / resumo
    if has_word(&[
        "workload", "analysis", "summary", "carga", "análise", "analise", "resumo",
    ]) {
        return WORKLOAD_RESPONSE.to_string();
    }

    // Maior carga
    if has_phrase(&["highest workload", "most busy", "maior carga"]) {
        return HIGHEST_WORKLOAD_RESPONSE.to_string();
    }

    // Ajuda / como usar
    if has_word(&["help", "guide", "ajuda", "guia"]) || has_phrase(&["how to", "como usar"]) {
        return HELP_RESPONSE.to_string();
    }

    pick(rng, &DEFAULT_RESPONSES).to_string()
}

fn pick<'a, R: Rng>(rng: &mut R, variants: &'a [&'a str]) -> &'a str {
    variants[rng.gen_range(0..variants.len())]
}
