use dioxus::prelude::*;

use crate::route::Route;

pub fn Ukno() -> Element {
    rsx! {
        h1 {
            class: "text-3xl font-bold text-gray-900 mb-6",
            "Об УКНО"
        }
        div {
            class: "max-w-2xl space-y-4 text-gray-700",
            p {
                "УКНО — креативное пространство в историческом центре Ульяновска. "
                "Здесь работают мастерские резидентов, проходят экскурсии, "
                "мастер-классы, лекции и городские фестивали."
            }
            p {
                "Резиденты пространства сами ведут свои события: расписание, "
                "запись и оплата собраны в одном месте. Выбирайте событие в афише, "
                "записывайтесь на сеанс и приходите."
            }
            p {
                "Мы открыты ежедневно с 10:00 до 22:00 по адресу "
                "г. Ульяновск, ул. Федерации, д. 89."
            }
        }
        div {
            class: "mt-8 flex gap-4",
            Link {
                class: "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-6 py-2.5",
                to: Route::EventsFeed,
                "Афиша"
            }
            Link {
                class: "text-blue-700 bg-white border border-blue-700 hover:bg-blue-50 font-medium rounded-lg text-sm px-6 py-2.5",
                to: Route::Requesits,
                "Реквизиты"
            }
        }
    }
}
