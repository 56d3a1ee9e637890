use super::{RefTable, Row, Section};

macro_rules! row {
    ($insumo:expr, $grupo:expr, $plano:expr $(,)?) => {
        Row {
            insumo: $insumo,
            grupo: $grupo,
            plano: $plano,
        }
    };
}

macro_rules! table {
    ($rows:expr $(,)?) => {
        RefTable {
            subtitle: None,
            caption: None,
            rows: $rows,
        }
    };
}

macro_rules! titled {
    ($subtitle:expr, $rows:expr $(,)?) => {
        RefTable {
            subtitle: Some($subtitle),
            caption: None,
            rows: $rows,
        }
    };
}

macro_rules! captioned {
    ($subtitle:expr, $caption:expr, $rows:expr $(,)?) => {
        RefTable {
            subtitle: Some($subtitle),
            caption: Some($caption),
            rows: $rows,
        }
    };
}

macro_rules! section {
    ($id:expr, $title:expr, $tables:expr $(,)?) => {
        Section {
            id: $id,
            title: $title,
            description: None,
            notes: &[],
            tables: $tables,
            footer: None,
        }
    };
}

const MOB: &str = "Mobilização/Desmobilização Colaboradores";
const LOC_LEVES: &str = "Locação Equipamentos Leves e Ferramentas Elétricas";
const MANUTENCAO: &str = "Serviços de Manutenção Preventiva e Corretiva";
const ENSAIOS: &str = "Ensaios e Laudos Mecânicos";
const EXAMES: &str = "Exames admissionais/demissionais/periódicos";

pub static SECTIONS: &[Section] = &[
    Section {
        id: "intro",
        title: "Tabela de Referência e Uso",
        description: Some(
            "Cada insumo pertence a um GRUPO e a um PLANO FINANCEIRO. Use esta tabela para \
             padronizar lançamentos e evitar divergências. Sempre valide o plano financeiro \
             que melhor representa o pedido de compra.",
        ),
        notes: &[
            "Para serviços de engenharia, o insumo deve ser a descrição objetiva do serviço.",
            "Em locações, o nome do insumo deve iniciar com ‘LOCAÇÃO’ — se não houver, trata-se de aquisição.",
        ],
        tables: &[],
        footer: None,
    },
    section!(
        "mao-obra",
        "Mão de Obra",
        &[
            titled!(
                "Serviços de Engenharia (descrição do serviço = insumo)",
                &[
                    row!("SERVIÇO DE SUPRESSÃO", "MÃO DE OBRA CONTRATADA", "SERVIÇO DE SUPRESSÃO"),
                    row!("SERVIÇO DE ESCAVAÇÃO", "MÃO DE OBRA CONTRATADA", "SERVIÇO DE ESCAVAÇÃO"),
                    row!(
                        "SERVIÇO DE TERRAPLANAGEM",
                        "MÃO DE OBRA CONTRATADA",
                        "SERVIÇO DE TERRAPLANAGEM",
                    ),
                ],
            ),
            captioned!(
                "Mão de Obra Contratada (CLT ou PJ)",
                "Para funções operacionais/administrativas, utilize SALÁRIOS E ORDENADOS.",
                &[
                    row!("ASSISTENTE ADMINISTRATIVO", "MÃO DE OBRA CONTRATADA", "SALÁRIOS E ORDENADOS"),
                    row!("MONTADOR", "MÃO DE OBRA CONTRATADA", "SALÁRIOS E ORDENADOS"),
                    row!("ELETRICISTA", "MÃO DE OBRA CONTRATADA", "SALÁRIOS E ORDENADOS"),
                ],
            ),
        ],
    ),
    Section {
        id: "servicos-avulsos",
        title: "Serviços Avulsos (terceiros e freelancers)",
        description: Some(
            "Serviços específicos contratados de terceiros. Não inclui frotas e fretes (há categoria própria).",
        ),
        notes: &[],
        tables: &[table!(&[
            row!("SERVIÇO DE REFRIGERAÇÃO", "MANUTENÇÕES EM GERAL", "MANUTENÇÕES, SERVIÇOS E OBRAS"),
            row!(
                "SERVIÇO DE INSTALAÇÃO DE CÂMERA",
                "MANUTENÇÕES EM GERAL",
                "MANUTENÇÕES, SERVIÇOS E OBRAS",
            ),
            row!(
                "SERVIÇO DE MANUTENÇÃO AR-CONDICIONADO",
                "MANUTENÇÕES EM GERAL",
                "MANUTENÇÕES, SERVIÇOS E OBRAS",
            ),
        ])],
        footer: None,
    },
    Section {
        id: "alimentacao",
        title: "Alimentação",
        description: Some("Três cenários: Ticket, Despesas Gerais e Obra."),
        notes: &[],
        tables: &[
            titled!(
                "Ticket",
                &[row!("TICKET ALIMENTAÇÃO FLASH", "ALIMENTAÇÃO", "TICKET ALIMENTAÇÃO")],
            ),
            captioned!(
                "Despesas Gerais com Alimentação",
                "Biscoitos, manteiga, bolo, refrigerante etc. — detalhar no campo de observações.",
                &[row!("DESPESAS COM ALIMENTAÇÃO", "ALIMENTAÇÃO", "ALIMENTAÇÃO — DESPESAS")],
            ),
            titled!(
                "Alimentação — Obra",
                &[row!("ALIMENTAÇÃO", "ALIMENTAÇÃO", "ALIMENTAÇÃO")],
            ),
        ],
        footer: None,
    },
    section!(
        "mobilizacao",
        "Mobilização e Desmobilização",
        &[
            captioned!(
                "Passagens",
                "Detalhar no pedido se é aérea, ônibus, balsa etc.",
                &[
                    row!("PASSAGEM — BAIXADA", MOB, "PASSAGENS"),
                    row!("PASSAGEM — FÉRIAS", MOB, "PASSAGENS"),
                    row!("PASSAGEM — ADMISSIONAL", MOB, "PASSAGENS"),
                    row!("PASSAGEM — DEMISSIONAL", MOB, "PASSAGENS"),
                    row!("PASSAGEM — OPERACIONAL", MOB, "PASSAGENS"),
                ],
            ),
            titled!(
                "Hospedagem",
                &[
                    row!("HOSPEDAGEM — BAIXADA", MOB, "HOSPEDAGEM"),
                    row!("HOSPEDAGEM — FÉRIAS", MOB, "HOSPEDAGEM"),
                    row!("HOSPEDAGEM — ADMISSIONAL", MOB, "HOSPEDAGEM"),
                    row!("HOSPEDAGEM — DEMISSIONAL", MOB, "HOSPEDAGEM"),
                    row!("HOSPEDAGEM — OPERACIONAL", MOB, "HOSPEDAGEM"),
                ],
            ),
            captioned!(
                "Despesas Simples",
                "Táxi, Uber, alimentação, pedágio etc.",
                &[
                    row!("DESPESAS DE TRANSPORTE E VIAGENS — BAIXADA", MOB, "DESPESA MOB/DESMOB"),
                    row!("DESPESAS DE TRANSPORTE E VIAGENS — FÉRIAS", MOB, "DESPESA MOB/DESMOB"),
                    row!("DESPESAS DE TRANSPORTE E VIAGENS — ADMISSIONAL", MOB, "DESPESA MOB/DESMOB"),
                    row!("DESPESAS DE TRANSPORTE E VIAGENS — DEMISSIONAL", MOB, "DESPESA MOB/DESMOB"),
                    row!("DESPESAS DE TRANSPORTE E VIAGENS — OPERACIONAL", MOB, "DESPESA MOB/DESMOB"),
                ],
            ),
            titled!(
                "Exames Admissionais/Demissionais/Periódicos",
                &[
                    row!("EXAME ADMISSIONAL", "Medicina Ocupacional", EXAMES),
                    row!("EXAME DEMISSIONAL", "Medicina Ocupacional", EXAMES),
                    row!("EXAME PERIÓDICO", "Medicina Ocupacional", EXAMES),
                ],
            ),
        ],
    ),
    section!(
        "frotas",
        "Serviços de Frotas",
        &[
            titled!(
                "Serviços Gerais (detalhar tipo de serviço)",
                &[row!("SERVIÇOS", MANUTENCAO, MANUTENCAO)],
            ),
            captioned!(
                "Ensaios e Laudos Mecânicos",
                "Especificar o tipo de laudo nos detalhes.",
                &[row!("ENSAIOS E LAUDOS MECÂNICOS", ENSAIOS, ENSAIOS)],
            ),
        ],
    ),
    Section {
        id: "locacoes",
        title: "Locação de Veículos e Equipamentos",
        description: Some(
            "Para locações, o nome do insumo e o plano financeiro devem conter a palavra ‘LOCAÇÃO’. \
             Caso contrário, é aquisição.",
        ),
        notes: &[],
        tables: &[
            titled!(
                "Locações (equipamentos em geral)",
                &[
                    row!("LOCAÇÃO DE GUINDASTE", "Locação de Veículos e Equipamentos", "LOCAÇÃO DE GUINDASTE"),
                    row!("LOCAÇÃO DE BETONEIRA", "Locação de Veículos e Equipamentos", "LOCAÇÃO DE BETONEIRA"),
                    row!(
                        "LOCAÇÃO DE RETROESCAVADEIRA",
                        "Locação de Veículos e Equipamentos",
                        "LOCAÇÃO DE RETROESCAVADEIRA",
                    ),
                ],
            ),
            captioned!(
                "Locação de Veículos Leves",
                "Descrever o veículo nos detalhes.",
                &[row!(
                    "LOCAÇÃO DE VEÍCULOS LEVES",
                    "Locação de Veículos e Equipamentos",
                    "LOCAÇÃO DE VEÍCULOS LEVES",
                )],
            ),
            titled!(
                "Locação — Rádio e Comunicação",
                &[row!(
                    "LOCAÇÃO DE RÁDIO E COMUNICAÇÃO",
                    "Locação de Equipamentos Leves e Ferramentas",
                    "LOCAÇÃO DE RÁDIO E COMUNICAÇÃO",
                )],
            ),
            titled!(
                "Locação — Banheiro Químico",
                &[row!(
                    "LOCAÇÃO DE BANHEIRO QUÍMICO",
                    "Locação de Equipamentos Leves e Ferramentas",
                    LOC_LEVES,
                )],
            ),
            titled!(
                "Locação — Container",
                &[row!("LOCAÇÃO DE CONTAINER", "LOCAÇÃO DE CONTAINER", "LOCAÇÃO DE CONTAINER")],
            ),
            titled!(
                "Locação — Equipamentos Leves e Ferramentas Elétricas",
                &[
                    row!("LOCAÇÃO DE TERRÔMETRO DIGITAL", LOC_LEVES, LOC_LEVES),
                    row!("LOCAÇÃO DE FURADEIRA DE IMPACTO", LOC_LEVES, LOC_LEVES),
                    row!("LOCAÇÃO DE GERADOR", LOC_LEVES, LOC_LEVES),
                ],
            ),
        ],
        footer: None,
    },
    section!(
        "outras-locacoes",
        "Outras Locações",
        &[table!(&[
            row!("ALUGUEL PARA ALOJAMENTO", "ALUGUÉIS", "ALUGUÉIS"),
            row!("ALUGUEL DE GALPÃO", "ALUGUÉIS", "ALUGUÉIS"),
            row!("LOCAÇÃO DE IMÓVEL", "ALUGUÉIS", "ALUGUÉIS"),
            row!("ALUGUEL DE TERRENO", "ALUGUÉIS", "ALUGUÉIS"),
        ])],
    ),
    section!(
        "energia",
        "Energia Elétrica",
        &[table!(&[row!("ENERGIA ELÉTRICA", "ENERGIA ELÉTRICA", "ENERGIA ELÉTRICA")])],
    ),
    section!(
        "agua",
        "Consumo de Água",
        &[table!(&[row!("CONSUMO DE ÁGUA", "CONSUMO DE ÁGUA", "CONSUMO DE ÁGUA")])],
    ),
    section!(
        "pneu",
        "Pneu",
        &[table!(&[row!("PNEU", "PEÇAS E COMPONENTES", "PNEU")])],
    ),
    section!(
        "telefone",
        "Despesas com Telefone",
        &[table!(&[row!(
            "DESPESAS COM TELEFONE",
            "DESPESAS COM TELEFONE",
            "DESPESAS COM TELEFONE",
        )])],
    ),
    section!(
        "reembolso",
        "Reembolso / Suprimentos",
        &[
            table!(&[row!("REEMBOLSO", "VERBAS, TAXAS E IMPOSTOS", "REEMBOLSO")]),
            titled!(
                "Abastecimento Ticket Log+",
                &[row!("ABASTECIMENTO TICKET LOG", "ABASTECIMENTO", "ABASTECIMENTO")],
            ),
            titled!(
                "Verba para suprimento de caixa",
                &[row!(
                    "VERBA PARA SUPRIMENTO DE CAIXA",
                    "VERBAS, TAXAS E IMPOSTOS",
                    "VERBA SUPRIMENTO DE CAIXA",
                )],
            ),
        ],
    ),
    Section {
        id: "aquisoes",
        title: "Aquisições de Equipamentos e Materiais",
        description: Some(
            "Compras de bens duráveis (ferramentas elétricas, eletrodomésticos, patrimônio). \
             Pertencem ao grupo e plano de sua natureza.",
        ),
        notes: &[],
        tables: &[table!(&[
            row!("FURADEIRA", "FERRAMENTAS ELÉTRICAS", "FERRAMENTAS ELÉTRICAS"),
            row!("MOTOSSERRA", "FERRAMENTAS ELÉTRICAS", "FERRAMENTAS ELÉTRICAS"),
            row!("NOTEBOOK", "EQUIPAMENTOS DE TI", "EQUIPAMENTOS DE TI"),
            row!("FOGÃO", "ELETRODOMÉSTICOS", "ELETRODOMÉSTICOS"),
            row!("CAMA", "MÓVEIS E MOBÍLIA", "MÓVEIS E MOBÍLIA"),
            row!("RETROESCAVADEIRA", "EQUIPAMENTOS PRÓPRIOS", "EQUIPAMENTOS PRÓPRIOS"),
        ])],
        footer: Some(
            "Exemplo: se fosse locação, o insumo seria ‘LOCAÇÃO DE RETROESCAVADEIRA’ e o plano \
             ‘LOCAÇÃO DE RETROESCAVADEIRA’.",
        ),
    },
];
