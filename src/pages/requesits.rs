use dioxus::prelude::*;

pub fn Requesits() -> Element {
    rsx! {
        h1 {
            class: "text-3xl font-bold text-gray-900 mb-6",
            "Реквизиты"
        }
        div {
            class: "max-w-2xl bg-white border border-gray-200 rounded-lg p-6",
            dl {
                class: "space-y-4 text-sm",
                div {
                    dt { class: "font-medium text-gray-900", "Полное наименование" }
                    dd { class: "mt-1 text-gray-700", "АНО «Креативное пространство УКНО»" }
                }
                div {
                    dt { class: "font-medium text-gray-900", "ИНН / КПП" }
                    dd { class: "mt-1 text-gray-700", "7325162840 / 732501001" }
                }
                div {
                    dt { class: "font-medium text-gray-900", "ОГРН" }
                    dd { class: "mt-1 text-gray-700", "1217300012345" }
                }
                div {
                    dt { class: "font-medium text-gray-900", "Юридический адрес" }
                    dd { class: "mt-1 text-gray-700", "432017, г. Ульяновск, ул. Федерации, д. 89" }
                }
                div {
                    dt { class: "font-medium text-gray-900", "Расчётный счёт" }
                    dd { class: "mt-1 text-gray-700", "40703810729110001234, Филиал «НИЖЕГОРОДСКИЙ» АО «АЛЬФА-БАНК»" }
                }
                div {
                    dt { class: "font-medium text-gray-900", "БИК / Корр. счёт" }
                    dd { class: "mt-1 text-gray-700", "042202824 / 30101810200000000824" }
                }
                div {
                    dt { class: "font-medium text-gray-900", "Контакты" }
                    dd {
                        class: "mt-1 text-gray-700",
                        a {
                            class: "text-blue-700 hover:underline",
                            href: "mailto:info@ukno.ru",
                            "info@ukno.ru"
                        }
                    }
                }
            }
        }
    }
}
