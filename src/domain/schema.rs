// ==========================================
// Survey Unifier - Per-provider schema tables
// ==========================================
// One SchemaDefinition per provider: the expected raw column list, the
// rename table into canonical slots, and the complement sources in their
// declared merge order. Consulted by the validator and the field mapper.
// ==========================================

use crate::domain::provider::ProviderType;

/// Canonical slot a provider column can be renamed into.
///
/// The six named address slots plus the three complement parts that are
/// merged into the single `complemento` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalSlot {
    Cep,
    Numero,
    Logradouro,
    Estado,
    Cidade,
    Bairro,
    Complemento1,
    Complemento2,
    Complemento3,
}

/// Expected schema and rename table for one provider.
#[derive(Debug)]
pub struct SchemaDefinition {
    pub provider: ProviderType,
    /// Raw expected column names, in file order. Normalized before any
    /// comparison against an actual header.
    pub expected_columns: &'static [&'static str],
    /// Raw source column name -> canonical slot.
    pub renames: &'static [(&'static str, CanonicalSlot)],
}

impl SchemaDefinition {
    /// Schema lookup table keyed by provider.
    pub fn for_provider(provider: ProviderType) -> &'static SchemaDefinition {
        match provider {
            ProviderType::Fibrasil => &FIBRASIL_SCHEMA,
            ProviderType::Atc => &ATC_SCHEMA,
            ProviderType::Vtal => &VTAL_SCHEMA,
            ProviderType::Ihs => &IHS_SCHEMA,
        }
    }

    /// Complement source columns in their declared merge order.
    pub fn complement_sources(&self) -> [&'static str; 3] {
        let mut sources = [""; 3];
        for (source, slot) in self.renames {
            match slot {
                CanonicalSlot::Complemento1 => sources[0] = source,
                CanonicalSlot::Complemento2 => sources[1] = source,
                CanonicalSlot::Complemento3 => sources[2] = source,
                _ => {}
            }
        }
        sources
    }
}

static FIBRASIL_SCHEMA: SchemaDefinition = SchemaDefinition {
    provider: ProviderType::Fibrasil,
    expected_columns: &[
        "comercializavel",
        "uf",
        "municipio",
        "codigo_ibge",
        "localidade",
        "cnl",
        "tipo",
        "survey_endereco",
        "bairro",
        "logradouro_tipo",
        "logradouro_titulo",
        "logradouro_nome",
        "logradouro_numero",
        "cep",
        "complemento_01",
        "argumento_01",
        "complemento_02",
        "argumento_02",
        "complemento_03",
        "argumento_03",
        "classificacao_residencial",
        "classificacao_negocio",
        "cto_atend_comercializaveis",
        "armario",
        "mapa_calor",
        "fb",
        "id_interno_fibrasil",
    ],
    renames: &[
        ("cep", CanonicalSlot::Cep),
        ("logradouro_numero", CanonicalSlot::Numero),
        ("logradouro_nome", CanonicalSlot::Logradouro),
        ("uf", CanonicalSlot::Estado),
        ("municipio", CanonicalSlot::Cidade),
        ("bairro", CanonicalSlot::Bairro),
        ("complemento_01", CanonicalSlot::Complemento1),
        ("complemento_02", CanonicalSlot::Complemento2),
        ("complemento_03", CanonicalSlot::Complemento3),
    ],
};

static ATC_SCHEMA: SchemaDefinition = SchemaDefinition {
    provider: ProviderType::Atc,
    expected_columns: &[
        "comercializavel",
        "uf",
        "municipio",
        "codigo_ibge",
        "localidade",
        "cnl",
        "tipo",
        "survey_endereco",
        "bairro",
        "tipo_logradouro",
        "titulo_logradouro",
        "nome_do_logradouro",
        "numero_fachada",
        "cep",
        "complemento_1",
        "atr_complemento_1",
        "complemento_2",
        "atr_complemento_2",
        "complemento_3",
        "atr_complemento_3",
        "tipo_mercado",
        "tipo_de_local",
        "cto_etiqueta",
        "cto_pop",
        "streetcode",
    ],
    renames: &[
        ("cep", CanonicalSlot::Cep),
        ("numero_fachada", CanonicalSlot::Numero),
        ("nome_do_logradouro", CanonicalSlot::Logradouro),
        ("uf", CanonicalSlot::Estado),
        ("municipio", CanonicalSlot::Cidade),
        ("bairro", CanonicalSlot::Bairro),
        ("complemento_1", CanonicalSlot::Complemento1),
        ("complemento_2", CanonicalSlot::Complemento2),
        ("complemento_3", CanonicalSlot::Complemento3),
    ],
};

static VTAL_SCHEMA: SchemaDefinition = SchemaDefinition {
    provider: ProviderType::Vtal,
    expected_columns: &[
        "celula",
        "estacao_abastecedora",
        "uf",
        "municipio",
        "localidade",
        "cod_localidade",
        "localidade_abrev",
        "logradouro",
        "cod_logradouro",
        "num_fachada",
        "complemento",
        "complemento2",
        "complemento3",
        "cep",
        "bairro",
        "cod_survey",
        "quantidade_ums",
        "cod_viabilidade",
        "tipo_viabilidade",
        "tipo_rede",
        "ucs_residenciais",
        "ucs_comerciais",
        "nome_cdo",
        "id_endereco",
        "latitude",
        "longitude",
        "tipo_survey",
        "rede_interna",
        "ums_certificadas",
        "rede_edif_cert",
        "num_pisos",
        "disp_comercial",
        "estado_controle",
        "data_estado_controle",
        "id_celula",
        "quantidade_hcs",
        "projeto",
    ],
    renames: &[
        ("cep", CanonicalSlot::Cep),
        ("num_fachada", CanonicalSlot::Numero),
        ("logradouro", CanonicalSlot::Logradouro),
        ("uf", CanonicalSlot::Estado),
        ("municipio", CanonicalSlot::Cidade),
        ("bairro", CanonicalSlot::Bairro),
        ("complemento", CanonicalSlot::Complemento1),
        ("complemento2", CanonicalSlot::Complemento2),
        ("complemento3", CanonicalSlot::Complemento3),
    ],
};

static IHS_SCHEMA: SchemaDefinition = SchemaDefinition {
    provider: ProviderType::Ihs,
    expected_columns: &[
        "comercializavel",
        "uf",
        "municipio",
        "codigo_ibge",
        "localidade",
        "cnl",
        "tipo",
        "survey_endereco",
        "bairro",
        "logradouro_tipo",
        "logradouro_titulo",
        "logradouro_nome",
        "logradouro_numero",
        "cep",
        "complemento_01",
        "argumento_01",
        "complemento_02",
        "argumento_02",
        "complemento_03",
        "argumento_03",
        "classificacao_residencial",
        "classificacao_negocio",
        "cto_atend_comercializaveis",
        "armario",
        "mapa_calor",
        "id_lote",
    ],
    renames: &[
        ("cep", CanonicalSlot::Cep),
        ("logradouro_numero", CanonicalSlot::Numero),
        ("logradouro_nome", CanonicalSlot::Logradouro),
        ("uf", CanonicalSlot::Estado),
        ("municipio", CanonicalSlot::Cidade),
        ("bairro", CanonicalSlot::Bairro),
        ("complemento_01", CanonicalSlot::Complemento1),
        ("complemento_02", CanonicalSlot::Complemento2),
        ("complemento_03", CanonicalSlot::Complemento3),
    ],
};
