use serde::Serialize;

/// Lending products (and the free fallback) the simulator can point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    BenefitPayrollPortability,
    PrivatePayrollPortability,
    BenefitPayrollLoan,
    PrivatePayrollLoan,
    SeveranceFundAdvance,
    FinancialEducation,
}

/// Static marketing copy for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ProductSheet {
    pub(crate) product: &'static str,
    pub(crate) description: &'static str,
    pub(crate) benefits: [&'static str; 4],
    pub(crate) profile: &'static str,
    pub(crate) message: &'static str,
}

impl ProductKind {
    pub(crate) const fn sheet(self) -> ProductSheet {
        match self {
            Self::BenefitPayrollPortability => ProductSheet {
                product: "Portabilidade de Consignado INSS",
                description: "Transfira seu consignado para a meutudo e reduza suas parcelas com taxas menores.",
                benefits: [
                    "Reduza até 40% no valor da parcela",
                    "Mesmas condições de pagamento ou melhores",
                    "Processo 100% digital e rápido",
                    "Libere margem para novo empréstimo se necessário",
                ],
                profile: "Aposentado/Pensionista INSS com consignado ativo",
                message: "Você pode reduzir o valor da sua parcela atual transferindo seu consignado para a meutudo.",
            },
            Self::PrivatePayrollPortability => ProductSheet {
                product: "Portabilidade de Consignado Privado",
                description: "Transfira seu consignado e obtenha condições melhores.",
                benefits: [
                    "Reduza o valor da parcela mensal",
                    "Taxas mais competitivas",
                    "Mantenha o desconto em folha",
                    "Libere margem consignável",
                ],
                profile: "Trabalhador CLT com consignado ativo",
                message: "Melhore as condições do seu consignado atual com a portabilidade.",
            },
            Self::BenefitPayrollLoan => ProductSheet {
                product: "Consignado INSS",
                description: "Crédito com desconto direto no benefício, taxas reduzidas e aprovação facilitada.",
                benefits: [
                    "Taxas a partir de 1,80% ao mês",
                    "Até 84 meses para pagar",
                    "Desconto automático no benefício",
                    "Aprovação rápida e sem burocracia",
                ],
                profile: "Aposentado/Pensionista INSS",
                message: "Você tem margem disponível para contratar crédito consignado com as melhores taxas do mercado.",
            },
            Self::PrivatePayrollLoan => ProductSheet {
                product: "Consignado Privado",
                description: "Crédito com desconto em folha para trabalhadores CLT de empresas conveniadas.",
                benefits: [
                    "Taxas competitivas a partir de 2,14% ao mês",
                    "Desconto automático na folha de pagamento",
                    "Até 96 meses para pagar",
                    "Sem consulta ao SPC/Serasa",
                ],
                profile: "Trabalhador CLT",
                message: "Contrate crédito consignado com desconto em folha e taxas mais baixas que o cartão.",
            },
            Self::SeveranceFundAdvance => ProductSheet {
                product: "Antecipação do Saque-Aniversário FGTS",
                description: "Antecipe até 10 anos do seu FGTS de uma só vez.",
                benefits: [
                    "Receba seu dinheiro em até 24 horas",
                    "Use seu FGTS sem sair do emprego",
                    "Taxas justas e transparentes",
                    "Processo 100% online",
                ],
                profile: "Trabalhador com saldo FGTS disponível",
                message: "Antecipe seu FGTS e use o valor para quitar suas dívidas com juros altos.",
            },
            Self::FinancialEducation => ProductSheet {
                product: "Planilha de Educação Financeira",
                description: "Material gratuito para organizar suas finanças e planejar a quitação de dívidas.",
                benefits: [
                    "Planilha completa de controle financeiro",
                    "Guia passo a passo para sair das dívidas",
                    "Calculadora de juros e parcelas",
                    "Dicas de economia e planejamento",
                ],
                profile: "Não elegível para produtos de crédito no momento",
                message: "Baixe nossa planilha para planejar como quitar suas dívidas aos poucos.",
            },
        }
    }

    /// Display name shown on the call-to-action.
    pub const fn product_name(self) -> &'static str {
        self.sheet().product
    }

    pub const fn is_credit_product(self) -> bool {
        !matches!(self, Self::FinancialEducation)
    }
}
